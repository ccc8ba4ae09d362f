//! Colour themes mapped to CSS utility classes.

use anyhow::{Result, bail};
use std::fmt;
use std::str::FromStr;

/// Colour palette applied to a resume template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Blue,
    Green,
    Purple,
    Gray,
}

impl Theme {
    /// All themes in display order.
    pub const ALL: [Theme; 4] = [Theme::Blue, Theme::Green, Theme::Purple, Theme::Gray];

    /// Returns the identifier used on the command line and in CSS classes.
    pub fn id(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Purple => "Purple",
            Self::Gray => "Gray",
        }
    }

    /// Solid background for banners.
    pub fn primary(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-800 text-white",
            Self::Green => "bg-green-800 text-white",
            Self::Purple => "bg-purple-900 text-white",
            Self::Gray => "bg-gray-800 text-white",
        }
    }

    pub fn section_heading(self) -> &'static str {
        match self {
            Self::Blue => "text-blue-800 font-semibold",
            Self::Green => "text-green-800 font-semibold",
            Self::Purple => "text-purple-800 font-semibold",
            Self::Gray => "text-gray-800 font-semibold",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            Self::Blue => "border-blue-200",
            Self::Green => "border-green-200",
            Self::Purple => "border-purple-200",
            Self::Gray => "border-gray-300",
        }
    }

    /// Text colour for secondary emphasis such as company names and links.
    pub fn accent(self) -> &'static str {
        match self {
            Self::Blue => "text-blue-600",
            Self::Green => "text-green-600",
            Self::Purple => "text-purple-600",
            Self::Gray => "text-gray-600",
        }
    }

    pub fn skill_badge(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 text-blue-800",
            Self::Green => "bg-green-100 text-green-800",
            Self::Purple => "bg-purple-100 text-purple-800",
            Self::Gray => "bg-gray-200 text-gray-800",
        }
    }

    pub fn header_background(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-50",
            Self::Green => "bg-green-50",
            Self::Purple => "bg-purple-50",
            Self::Gray => "bg-gray-100",
        }
    }

    pub fn header_text(self) -> &'static str {
        match self {
            Self::Blue => "text-blue-900",
            Self::Green => "text-green-900",
            Self::Purple => "text-purple-900",
            Self::Gray => "text-gray-900",
        }
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    /// Parses a theme id case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        match Self::ALL.into_iter().find(|theme| theme.id() == wanted) {
            Some(theme) => Ok(theme),
            None => bail!(
                "Unknown theme: {} (available: {})",
                s,
                Self::ALL.map(Theme::id).join(", ")
            ),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

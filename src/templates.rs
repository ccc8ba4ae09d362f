//! Resume layouts
//!
//! Each template turns a [`Resume`] and a [`Theme`] into the markup placed
//! inside the preview page. Classic and modern follow the resume's section
//! order; compact uses a fixed two-column arrangement.

mod classic;
mod compact;
mod modern;

use anyhow::{Result, bail};
use maud::Markup;
use std::fmt;
use std::str::FromStr;

use crate::resume::Resume;
use crate::theme::Theme;

/// Available resume layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Compact,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Classic, Template::Modern, Template::Compact];

    pub fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Modern => "modern",
            Self::Compact => "compact",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Modern => "Modern",
            Self::Compact => "Compact",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Classic => "A clean, professional design with traditional layout",
            Self::Modern => "A colorful design with section titles highlighted in theme colors",
            Self::Compact => "A clean two-column layout inspired by LaTeX resume designs",
        }
    }

    /// Theme id the template is designed around.
    ///
    /// May name a palette that does not exist (modern asks for `red`); see
    /// [`Template::resolve_theme`].
    pub fn default_theme_id(self) -> &'static str {
        match self {
            Self::Classic => "blue",
            Self::Modern => "red",
            Self::Compact => "gray",
        }
    }

    /// Theme ids suggested alongside this template.
    pub fn recommended_themes(self) -> &'static [&'static str] {
        match self {
            Self::Classic => &["blue", "gray", "green"],
            Self::Modern => &["purple", "red", "green"],
            Self::Compact => &["gray", "blue", "red"],
        }
    }

    /// Picks the theme to render with.
    ///
    /// An explicit choice wins. Otherwise the template default is used when
    /// such a palette exists, falling back to [`Theme::default`].
    pub fn resolve_theme(self, explicit: Option<Theme>) -> Theme {
        if let Some(theme) = explicit {
            return theme;
        }

        self.default_theme_id().parse().unwrap_or_else(|_| {
            log::warn!(
                "Template {} prefers unavailable theme {}, using {}",
                self.id(),
                self.default_theme_id(),
                Theme::default()
            );
            Theme::default()
        })
    }

    /// Renders the resume body with this layout.
    pub fn render(self, resume: &Resume, theme: Theme) -> Markup {
        log::debug!("Rendering {} template with {} theme", self.id(), theme);
        match self {
            Self::Classic => classic::render(resume, theme),
            Self::Modern => modern::render(resume, theme),
            Self::Compact => compact::render(resume, theme),
        }
    }
}

impl FromStr for Template {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        match Self::ALL.into_iter().find(|template| template.id() == wanted) {
            Some(template) => Ok(template),
            None => bail!(
                "Unknown template: {} (available: {})",
                s,
                Self::ALL.map(Template::id).join(", ")
            ),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

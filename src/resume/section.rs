//! Section identifiers and ordering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a resume section in the section order.
///
/// Serialized as the camelCase id used in resume documents. Ids that match
/// no built-in section are kept as [`SectionId::Custom`] so custom sections
/// and unknown entries survive a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionId {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
    PageBreak,
    Custom(String),
}

/// Order used when a resume does not store one.
pub const DEFAULT_SECTION_ORDER: [SectionId; 8] = [
    SectionId::PersonalInfo,
    SectionId::Summary,
    SectionId::Experience,
    SectionId::Education,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Certifications,
    SectionId::Achievements,
];

impl SectionId {
    /// Returns the document id (`personalInfo`, `pageBreak`, custom key).
    pub fn id(&self) -> &str {
        match self {
            Self::PersonalInfo => "personalInfo",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Achievements => "achievements",
            Self::PageBreak => "pageBreak",
            Self::Custom(key) => key,
        }
    }

    /// Returns the human readable label shown in section listings.
    pub fn label(&self) -> &str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Summary => "Summary",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certifications => "Certifications",
            Self::Achievements => "Achievements",
            Self::PageBreak => "Page Break",
            Self::Custom(key) => key,
        }
    }
}

impl FromStr for SectionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "personalInfo" => Self::PersonalInfo,
            "summary" => Self::Summary,
            "experience" => Self::Experience,
            "education" => Self::Education,
            "skills" => Self::Skills,
            "projects" => Self::Projects,
            "certifications" => Self::Certifications,
            "achievements" => Self::Achievements,
            "pageBreak" => Self::PageBreak,
            other => Self::Custom(other.to_string()),
        })
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(id) => id,
            Err(never) => match never {},
        }
    }
}

impl From<SectionId> for String {
    fn from(value: SectionId) -> Self {
        value.id().to_string()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

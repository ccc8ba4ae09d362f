//! Resume entry types.
//!
//! Every field defaults when missing so partially filled documents load.
//! Empty strings mean "not provided" throughout.

use serde::{Deserialize, Serialize};

/// Contact details and headline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin_username: String,
    pub github_username: String,
    pub objective: String,
    pub links: Vec<Link>,
}

impl PersonalInfo {
    /// Returns the full name, falling back to first and last name.
    pub fn display_name(&self) -> Option<String> {
        if !self.name.trim().is_empty() {
            return Some(self.name.trim().to_string());
        }

        let joined = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let joined = joined.trim();
        (!joined.is_empty()).then(|| joined.to_string())
    }

    /// Returns the LinkedIn profile URL when a username is set.
    pub fn linkedin_url(&self) -> Option<String> {
        (!self.linkedin_username.is_empty())
            .then(|| format!("https://www.linkedin.com/{}", self.linkedin_username))
    }

    /// Returns the GitHub profile URL when a username is set.
    pub fn github_url(&self) -> Option<String> {
        (!self.github_username.is_empty())
            .then(|| format!("https://www.github.com/{}", self.github_username))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl Experience {
    /// Formats `start - end`, with `Present` for the current position.
    pub fn date_range(&self) -> String {
        format_range(&self.start_date, &self.end_date, self.current)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub gpa: String,
    pub description: String,
}

impl Education {
    pub fn date_range(&self) -> String {
        format_range(&self.start_date, &self.end_date, self.current)
    }
}

/// A skill stored either as a bare string or as `{ "name": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skill {
    Name(String),
    Detailed { name: String },
}

impl Skill {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub title: String,
    pub role: String,
    pub link: String,
    pub technologies: String,
    pub date: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

impl Project {
    /// Returns `name`, then `title`, or `None` when both are empty.
    pub fn display_name(&self) -> Option<&str> {
        [self.name.as_str(), self.title.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }

    /// Returns the single date or the `start – end` span.
    pub fn period(&self) -> String {
        let start = if self.start_date.is_empty() {
            &self.date
        } else {
            &self.start_date
        };

        if !start.is_empty() && !self.end_date.is_empty() {
            format!("{} – {}", start, self.end_date)
        } else {
            start.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(rename = "credentialURL")]
    pub credential_url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    pub name: String,
    pub title: String,
    pub url: String,
    pub year: String,
    pub date: String,
    pub description: String,
}

impl Achievement {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.title
        } else {
            &self.name
        }
    }

    /// Returns the year, falling back to the free-form date.
    pub fn when(&self) -> &str {
        if self.year.is_empty() {
            &self.date
        } else {
            &self.year
        }
    }
}

/// User defined section referenced from the section order by `key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub key: String,
    pub title: String,
    pub items: Vec<CustomItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomItem {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBreak {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

fn format_range(start: &str, end: &str, current: bool) -> String {
    let end = if current { "Present" } else { end };
    format!("{} - {}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        // Arrange
        let info = PersonalInfo {
            name: "Ada Lovelace".to_string(),
            first_name: "Augusta".to_string(),
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(info.display_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_display_name_joins_first_and_last() {
        // Arrange
        let info = PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(info.display_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_display_name_single_part() {
        // Arrange
        let info = PersonalInfo {
            last_name: "Lovelace".to_string(),
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(info.display_name().as_deref(), Some("Lovelace"));
    }

    #[test]
    fn test_display_name_missing() {
        assert_eq!(PersonalInfo::default().display_name(), None);
    }

    #[test]
    fn test_profile_urls() {
        // Arrange
        let info = PersonalInfo {
            linkedin_username: "in/ada".to_string(),
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(
            info.linkedin_url().as_deref(),
            Some("https://www.linkedin.com/in/ada")
        );
        assert_eq!(info.github_url(), None);
    }

    #[test]
    fn test_experience_current_shows_present() {
        // Arrange
        let job = Experience {
            start_date: "Oct. 2020".to_string(),
            end_date: "ignored".to_string(),
            current: true,
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(job.date_range(), "Oct. 2020 - Present");
    }

    #[test]
    fn test_skill_deserializes_both_shapes() {
        // Arrange
        let json = r#"["Rust", {"name": "SQL"}]"#;

        // Act
        let skills: Vec<Skill> = serde_json::from_str(json).unwrap();

        // Assert
        let names: Vec<&str> = skills.iter().map(Skill::name).collect();
        assert_eq!(names, ["Rust", "SQL"]);
    }

    #[test]
    fn test_project_display_name_falls_back_to_title() {
        // Arrange
        let project = Project {
            title: "Robot".to_string(),
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(project.display_name(), Some("Robot"));
        assert_eq!(Project::default().display_name(), None);
    }

    #[test]
    fn test_project_period() {
        // Arrange
        let single = Project {
            date: "2017".to_string(),
            ..Default::default()
        };
        let span = Project {
            start_date: "Feb 2017".to_string(),
            end_date: "July 2017".to_string(),
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(single.period(), "2017");
        assert_eq!(span.period(), "Feb 2017 – July 2017");
        assert_eq!(Project::default().period(), "");
    }

    #[test]
    fn test_certification_credential_url_key() {
        // Arrange
        let json = r#"{"name": "CKA", "credentialURL": "https://c.io/1"}"#;

        // Act
        let cert: Certification = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(cert.credential_url, "https://c.io/1");
    }

    #[test]
    fn test_achievement_fallbacks() {
        // Arrange
        let achievement = Achievement {
            title: "Paper".to_string(),
            date: "2018-05".to_string(),
            ..Default::default()
        };

        // Act & Assert
        assert_eq!(achievement.display_name(), "Paper");
        assert_eq!(achievement.when(), "2018-05");
    }
}

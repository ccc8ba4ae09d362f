//! Header contact details component

use maud::{Markup, html};

use super::icons::{ContactKind, contact_icon};
use crate::resume::PersonalInfo;

/// A single contact detail with optional link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub text: String,
    pub href: Option<String>,
}

impl ContactItem {
    /// Whether the link should open in a new tab.
    fn is_external(&self) -> bool {
        matches!(
            self.kind,
            ContactKind::Website | ContactKind::LinkedIn | ContactKind::GitHub
        )
    }
}

/// Collects the contact details that are filled in
///
/// Order is email, phone, location, website, LinkedIn, GitHub. Email and
/// phone link to `mailto:` and `tel:` targets; location is plain text.
///
/// # Arguments
///
/// * `info`: Personal information section of the resume
///
/// # Returns
///
/// Contact items for non-empty fields only
pub fn contact_items(info: &PersonalInfo) -> Vec<ContactItem> {
    let mut items = Vec::new();

    if !info.email.is_empty() {
        items.push(ContactItem {
            kind: ContactKind::Email,
            text: info.email.clone(),
            href: Some(format!("mailto:{}", info.email)),
        });
    }
    if !info.phone.is_empty() {
        items.push(ContactItem {
            kind: ContactKind::Phone,
            text: info.phone.clone(),
            href: Some(format!("tel:{}", info.phone)),
        });
    }
    if !info.location.is_empty() {
        items.push(ContactItem {
            kind: ContactKind::Location,
            text: info.location.clone(),
            href: None,
        });
    }
    if !info.website.is_empty() {
        items.push(ContactItem {
            kind: ContactKind::Website,
            text: info.website.clone(),
            href: Some(info.website.clone()),
        });
    }
    if let Some(url) = info.linkedin_url() {
        items.push(ContactItem {
            kind: ContactKind::LinkedIn,
            text: info.linkedin_username.clone(),
            href: Some(url),
        });
    }
    if let Some(url) = info.github_url() {
        items.push(ContactItem {
            kind: ContactKind::GitHub,
            text: info.github_username.clone(),
            href: Some(url),
        });
    }

    items
}

/// Renders contact details as an icon row
pub fn contact_list(info: &PersonalInfo) -> Markup {
    html! {
        div class="contact-list" {
            @for item in contact_items(info) {
                div class="contact-item" {
                    (contact_icon(item.kind))
                    @if let Some(href) = &item.href {
                        @if item.is_external() {
                            a href=(href) target="_blank" rel="noopener noreferrer" { (item.text) }
                        } @else {
                            a href=(href) { (item.text) }
                        }
                    } @else {
                        span { (item.text) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_items_skip_empty_fields() {
        // Arrange
        let info = PersonalInfo {
            email: "a@b.c".to_string(),
            location: "Oslo".to_string(),
            ..Default::default()
        };

        // Act
        let items = contact_items(&info);

        // Assert
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].href.as_deref(), Some("mailto:a@b.c"));
        assert_eq!(items[1].kind, ContactKind::Location);
        assert_eq!(items[1].href, None);
    }

    #[test]
    fn test_contact_items_profile_links() {
        // Arrange
        let info = PersonalInfo {
            github_username: "octo".to_string(),
            ..Default::default()
        };

        // Act
        let items = contact_items(&info);

        // Assert
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "octo");
        assert_eq!(items[0].href.as_deref(), Some("https://www.github.com/octo"));
    }

    #[test]
    fn test_contact_list_escapes_text() {
        // Arrange
        let info = PersonalInfo {
            location: "<Remote>".to_string(),
            ..Default::default()
        };

        // Act
        let html = contact_list(&info).into_string();

        // Assert
        assert!(html.contains("&lt;Remote&gt;"));
        assert!(!html.contains("<Remote>"));
    }

    #[test]
    fn test_contact_list_external_links_open_new_tab() {
        // Arrange
        let info = PersonalInfo {
            website: "https://me.dev".to_string(),
            phone: "123".to_string(),
            ..Default::default()
        };

        // Act
        let html = contact_list(&info).into_string();

        // Assert
        assert!(html.contains(r#"<a href="tel:123">123</a>"#));
        assert!(html.contains(
            r#"<a href="https://me.dev" target="_blank" rel="noopener noreferrer">https://me.dev</a>"#
        ));
    }
}

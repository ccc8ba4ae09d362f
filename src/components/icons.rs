//! Contact icon rendering

use maud::{Markup, html};

/// Kind of contact detail shown in resume headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Website,
    LinkedIn,
    GitHub,
}

/// Returns Phosphor icon classes for a contact kind
pub fn icon_class(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "ph ph-envelope",
        ContactKind::Phone => "ph ph-phone",
        ContactKind::Location => "ph ph-map-pin",
        ContactKind::Website => "ph ph-globe",
        ContactKind::LinkedIn => "ph ph-linkedin-logo",
        ContactKind::GitHub => "ph ph-github-logo",
    }
}

/// Renders the icon for a contact kind
pub fn contact_icon(kind: ContactKind) -> Markup {
    html! {
        i class=(format!("{} contact-icon", icon_class(kind))) {}
    }
}

/// Renders the small "opens elsewhere" marker used next to external links
pub fn external_link_icon() -> Markup {
    html! {
        i class="ph ph-arrow-square-out link-icon" {}
    }
}

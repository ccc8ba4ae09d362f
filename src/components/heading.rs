//! Section heading components

use maud::{Markup, html};

use crate::theme::Theme;

/// Signature shared by heading styles so section renderers can take either.
pub type HeadingFn = fn(&str, Theme) -> Markup;

/// Renders a themed heading on a light grey strip
///
/// Used by the classic layout. Title text is uppercased through CSS.
pub fn section_heading(title: &str, theme: Theme) -> Markup {
    html! {
        h3 class=(format!(
            "section-heading text-base font-bold my-2 uppercase px-2 py-1 rounded bg-gray-100 {}",
            theme.section_heading()
        )) {
            (title)
        }
    }
}

/// Renders a heading as a solid bar in the theme's primary colour
///
/// Used by the modern layout.
pub fn banner_heading(title: &str, theme: Theme) -> Markup {
    html! {
        h2 class=(format!(
            "section-heading text-base font-bold my-2 uppercase px-3 py-1 rounded {}",
            theme.primary()
        )) {
            (title)
        }
    }
}

/// Renders an underlined heading using the theme border colour
///
/// Used by the compact layout.
pub fn ruled_heading(title: &str, theme: Theme) -> Markup {
    html! {
        h2 class=(format!("text-lg font-bold uppercase border-b mb-3 {}", theme.border())) {
            (title)
        }
    }
}

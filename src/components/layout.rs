//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

/// Script tag source for the utility CSS runtime used by template classes.
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Icon font for contact and link icons.
const PHOSPHOR_ICONS: &str = "https://unpkg.com/@phosphor-icons/web";

/// Wraps resume markup with standard HTML structure
///
/// Provides DOCTYPE, charset, viewport, the utility CSS runtime and the
/// bundled stylesheets. Body classes carry the active theme and template
/// so print and screen styles can target them.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `stylesheets`: CSS file paths to include
/// * `body_class`: Classes for the `body` element
/// * `body`: Template markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, stylesheets: &[&str], body_class: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Resume" }
                script src=(TAILWIND_CDN) {}
                script src=(PHOSPHOR_ICONS) {}
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body class=(body_class) {
                main class="container" {
                    (body)
                }
            }
        }
    }
}

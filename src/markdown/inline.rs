//! Inline passes: bold, italic and links.
//!
//! Each pass rewrites the whole text in one `replace_all`. Content groups
//! are lazy and never cross a line terminator (`\r`, `\n`, U+2028,
//! U+2029), so a marker left open on one line is not closed by a marker on
//! the next.

use regex::Regex;
use std::sync::LazyLock;

/// CSS classes applied to every rendered link.
pub const LINK_CLASS: &str = "text-purple-700 hover:underline";

static BOLD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*").expect("bold pattern is valid")
});

static ITALIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^\r\n\x{2028}\x{2029}]*?)\*").expect("italic pattern is valid")
});

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\r\n\x{2028}\x{2029}]*?)\]\(([^\r\n\x{2028}\x{2029}]*?)\)")
        .expect("link pattern is valid")
});

/// Replaces `**content**` with `<strong>content</strong>`.
///
/// Must run before [`render_italic`], otherwise each `**` would be read as
/// two italic markers.
pub fn render_bold(text: &str) -> String {
    BOLD_PATTERN
        .replace_all(text, "<strong>${1}</strong>")
        .into_owned()
}

/// Replaces `*content*` with `<em>content</em>`.
pub fn render_italic(text: &str) -> String {
    ITALIC_PATTERN.replace_all(text, "<em>${1}</em>").into_owned()
}

/// Replaces `[label](url)` with an anchor opening in a new tab.
///
/// The url is inserted verbatim into the `href` attribute.
pub fn render_links(text: &str) -> String {
    let replacement = format!(
        r#"<a href="${{2}}" class="{}" target="_blank" rel="noopener noreferrer">${{1}}</a>"#,
        LINK_CLASS
    );
    LINK_PATTERN
        .replace_all(text, replacement.as_str())
        .into_owned()
}

//! Markdown dialect to HTML fragment rendering.

use super::inline::{render_bold, render_italic, render_links};
use super::lists::{render_bullet_items, render_numbered_items, wrap_list_items};

/// Renders resume markdown to an HTML fragment.
///
/// Passes run in a fixed order, each over the output of the previous one:
/// bold, italic, links, bullet lines, numbered lines, list grouping, and
/// finally removal of every `\n`. Later passes depend on earlier ones:
/// italic must not see `**`, and list grouping needs the line structure
/// that the last pass removes.
///
/// Absent and empty input both render to an empty string. Malformed
/// markup is left as literal text; the function cannot fail.
///
/// # Arguments
///
/// * `text`: Free-text field content, or `None` when the field is unset
///
/// # Returns
///
/// HTML fragment without surrounding document structure
pub fn render_markdown(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let html = render_bold(text);
    let html = render_italic(&html);
    let html = render_links(&html);
    let html = render_bullet_items(&html);
    let html = render_numbered_items(&html);
    let html = wrap_list_items(&html);

    log::trace!("Rendered {} bytes of markdown", text.len());

    html.replace('\n', "")
}

/// Renders each non-blank line as its own fragment.
///
/// Used by layouts that print one paragraph per description line. Lines
/// consisting only of whitespace are skipped.
pub fn render_markdown_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| render_markdown(Some(line)))
        .collect()
}

//! Markdown-lite rendering through the public API.

use pretty_assertions::assert_eq;
use resumark::{render_markdown, render_markdown_lines};

const UL: &str = r#"<ul class="list-disc ml-5 mb-2">"#;

#[test]
fn test_absent_and_empty_input_render_empty() {
    assert_eq!(render_markdown(None), "");
    assert_eq!(render_markdown(Some("")), "");
}

#[test]
fn test_plain_text_passes_through() {
    assert_eq!(render_markdown(Some("Just words & <b>")), "Just words & <b>");
}

#[test]
fn test_inline_markup() {
    // Arrange
    let input = "**Bold** and *soft* with [docs](https://example.com)";

    // Act
    let html = render_markdown(Some(input));

    // Assert
    assert_eq!(
        html,
        "<strong>Bold</strong> and <em>soft</em> with <a href=\"https://example.com\" \
         class=\"text-purple-700 hover:underline\" target=\"_blank\" \
         rel=\"noopener noreferrer\">docs</a>"
    );
}

#[test]
fn test_bullet_block_is_wrapped_once() {
    // Arrange
    let input = "• first\n• second";

    // Act
    let html = render_markdown(Some(input));

    // Assert
    assert_eq!(html, format!("{UL}<li>first</li><li>second</li></ul>"));
}

#[test]
fn test_numbered_and_bullet_lines_share_a_list() {
    // Arrange
    let input = "Intro\n1. one\n• two\nOutro";

    // Act
    let html = render_markdown(Some(input));

    // Assert
    assert_eq!(html, format!("Intro{UL}<li>one</li><li>two</li></ul>Outro"));
}

#[test]
fn test_separate_blocks_get_separate_lists() {
    // Arrange
    let input = "• a\ntext\n• b";

    // Act
    let html = render_markdown(Some(input));

    // Assert
    assert_eq!(html, format!("{UL}<li>a</li></ul>text{UL}<li>b</li></ul>"));
}

#[test]
fn test_output_has_no_newlines() {
    // Arrange
    let input = "line one\nline two\n\n• item\n";

    // Act
    let html = render_markdown(Some(input));

    // Assert
    assert!(!html.contains('\n'));
    assert_eq!(html.matches("<ul").count(), html.matches("</ul>").count());
}

#[test]
fn test_markup_inside_list_items() {
    // Arrange
    let input = "• **Led** a *team*";

    // Act
    let html = render_markdown(Some(input));

    // Assert
    assert_eq!(html, format!("{UL}<li><strong>Led</strong> a <em>team</em></li></ul>"));
}

#[test]
fn test_render_markdown_lines_skips_blank_lines() {
    // Arrange
    let input = "• one\n\n   \n**two**";

    // Act
    let lines = render_markdown_lines(input);

    // Assert
    assert_eq!(
        lines,
        vec![
            format!("{UL}<li>one</li></ul>"),
            "<strong>two</strong>".to_string(),
        ]
    );
}

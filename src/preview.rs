//! Preview page generation.
//!
//! The preview is a standalone HTML page. Printing it from a browser is the
//! supported way to produce a PDF; the bundled stylesheet hides screen-only
//! decoration and honours page breaks in print.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{STYLESHEET, write_css_assets};
use crate::components::layout::page_wrapper;
use crate::resume::Resume;
use crate::templates::Template;
use crate::theme::Theme;

/// Generates the complete preview document.
///
/// # Arguments
///
/// * `resume`: Resume data
/// * `template`: Layout to render with
/// * `theme`: Colour theme
///
/// # Returns
///
/// HTML document markup
pub fn generate_preview(resume: &Resume, template: Template, theme: Theme) -> Markup {
    let title = resume
        .personal_info
        .display_name()
        .unwrap_or_else(|| "Untitled".to_string());
    let body_class = format!("theme-{} template-{}", theme.id(), template.id());

    page_wrapper(
        &title,
        &[STYLESHEET],
        &body_class,
        template.render(resume, theme),
    )
}

/// Writes the preview page and its assets to `output`.
///
/// Creates `output` and `output/assets` when missing and overwrites any
/// previous preview.
///
/// # Errors
///
/// Returns error if directories cannot be created or files cannot be written
pub fn write_preview(
    output: &Path,
    resume: &Resume,
    template: Template,
    theme: Theme,
) -> Result<PathBuf> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let assets_dir = output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    write_css_assets(&assets_dir)?;

    let html = generate_preview(resume, template, theme);
    let index_path = output.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write preview to {}", index_path.display()))?;

    log::debug!("Wrote preview to {}", index_path.display());
    Ok(index_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_preview_body_classes() {
        // Arrange
        let resume = Resume::default();

        // Act
        let html = generate_preview(&resume, Template::Modern, Theme::Purple).into_string();

        // Assert
        assert!(html.contains(r#"<body class="theme-purple template-modern">"#));
        assert!(html.contains("<title>Untitled - Resume</title>"));
        assert!(html.contains(r#"href="assets/resume.css""#));
    }

    #[test]
    fn test_generate_preview_title_uses_name() {
        // Arrange
        let mut resume = Resume::default();
        resume.personal_info.first_name = "Ada".to_string();

        // Act
        let html = generate_preview(&resume, Template::Classic, Theme::Blue).into_string();

        // Assert
        assert!(html.contains("<title>Ada - Resume</title>"));
    }
}

//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");
const PRINT: &str = include_str!("../assets/print.css");

/// Stylesheet path referenced from the preview page.
pub const STYLESHEET: &str = "assets/resume.css";

/// Writes the bundled resume stylesheet to the assets directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "resume.css", &[BASE, MARKDOWN, PRINT])
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

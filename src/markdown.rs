//! Lightweight markdown for resume free-text fields.
//!
//! Resume summaries and descriptions use a small dialect: `**bold**`,
//! `*italic*`, `[label](url)` links, and list lines starting with `• ` or
//! `1. `. Rendering is a fixed sequence of text passes followed by list
//! grouping, producing an HTML fragment that templates embed as trusted
//! markup. Input is not escaped.

mod inline;
mod lists;
mod renderer;

pub use renderer::{render_markdown, render_markdown_lines};

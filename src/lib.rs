//! Printable HTML resumes from JSON resume documents.

mod assets;
pub mod components;
mod config;
mod markdown;
mod preview;
pub mod resume;
mod templates;
mod theme;
mod util;

pub use assets::write_css_assets;
pub use config::{Command, Config};
pub use markdown::{render_markdown, render_markdown_lines};
pub use preview::{generate_preview, write_preview};
pub use resume::{Resume, SectionId};
pub use templates::Template;
pub use theme::Theme;

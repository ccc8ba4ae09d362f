//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::templates::Template;
use crate::theme::Theme;

/// Command line configuration for Resumark.
#[derive(Debug, Clone, Parser)]
#[command(name = "resumark", version, about, long_about = None)]
pub struct Config {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render a resume JSON document to a printable HTML page
    Build {
        /// Resume JSON file (bundled sample when omitted)
        resume: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Layout template (classic, modern, compact)
        #[arg(long, default_value = "classic")]
        template: String,

        /// Colour theme (blue, green, purple, gray)
        #[arg(long)]
        theme: Option<String>,

        /// Do not open the generated page in a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Render markdown-lite text to an HTML fragment on stdout
    Markdown {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,
    },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input path does not exist or a template or theme
    /// name is unknown.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Build {
                resume,
                template,
                theme,
                ..
            } => {
                if let Some(path) = resume {
                    ensure_exists(path, "Resume file")?;
                }
                template.parse::<Template>()?;
                if let Some(theme) = theme {
                    theme.parse::<Theme>()?;
                }
            }
            Command::Markdown { input } => {
                if let Some(path) = input {
                    ensure_exists(path, "Input file")?;
                }
            }
        }

        Ok(())
    }
}

impl Command {
    /// Returns the selected template for a build.
    ///
    /// # Errors
    ///
    /// Returns error if the template name is unknown.
    pub fn template(&self) -> Result<Template> {
        match self {
            Self::Build { template, .. } => template.parse(),
            Self::Markdown { .. } => Ok(Template::default()),
        }
    }

    /// Returns the explicitly selected theme, if any.
    ///
    /// # Errors
    ///
    /// Returns error if the theme name is unknown.
    pub fn theme(&self) -> Result<Option<Theme>> {
        match self {
            Self::Build {
                theme: Some(name), ..
            } => name.parse().map(Some),
            _ => Ok(None),
        }
    }
}

fn ensure_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} does not exist: {}", what, path.display());
    }
    Ok(())
}

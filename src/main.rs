use anyhow::{Context, Result};
use log::LevelFilter;
use resumark::{Command, Config, Resume, render_markdown, write_preview};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(if config.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format_timestamp(None)
        .init();

    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Build {
            resume,
            output,
            no_open,
            ..
        } => build(&config.command, resume.as_deref(), output, *no_open),
        Command::Markdown { input } => markdown(input.as_ref()),
    }
}

fn build(command: &Command, resume: Option<&Path>, output: &Path, no_open: bool) -> Result<()> {
    let resume = match resume {
        Some(path) => {
            log::debug!("Loading resume from {}", path.display());
            Resume::load(path)?
        }
        None => {
            log::info!("No resume given, rendering the bundled sample");
            Resume::sample()?
        }
    };

    let template = command.template()?;
    let theme = template.resolve_theme(command.theme()?);

    let page = write_preview(output, &resume, template, theme)
        .context("Failed to generate preview")?;
    println!("Generated: {}", page.display());

    if !no_open && let Err(e) = open::that(&page) {
        log::warn!("Could not open browser: {:#}", e);
    }

    Ok(())
}

fn markdown(input: Option<&PathBuf>) -> Result<()> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    println!("{}", render_markdown(Some(&text)));
    Ok(())
}

//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing resume documents into temporary
//! directories used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal resume document with one custom section and a page break.
pub const MINIMAL_RESUME: &str = r#"{
  "personalInfo": { "name": "Ada Lovelace", "title": "Analyst", "email": "ada@example.com" },
  "summary": "Writes **notes** on engines.",
  "experience": [
    {
      "company": "Analytical Engines Ltd",
      "position": "Programmer",
      "startDate": "1842",
      "current": true,
      "description": "• Published *Note G*\n• Reviewed [the engine](https://example.com/engine)"
    }
  ],
  "skills": ["Mathematics", { "name": "Python" }],
  "customSections": [
    { "key": "talks", "title": "Talks", "items": [{ "title": "On Engines", "date": "1843" }] }
  ],
  "pageBreaks": [{ "id": "break-1" }],
  "sectionOrder": ["summary", "talks", "pageBreak", "experience", "skills"]
}"#;

/// Writes resume JSON to `resume.json` inside a fresh temporary directory.
///
/// # Returns
///
/// Temporary directory guard and the path of the written file
///
/// # Errors
///
/// Returns error if the directory or file cannot be created
pub fn write_resume(json: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("resume.json");
    fs::write(&path, json)?;
    Ok((dir, path))
}

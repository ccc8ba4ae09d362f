//! Utility functions for resumark

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

static URL_SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(www\.)?").expect("url prefix pattern is valid"));

/// Derives a custom section key from its title.
///
/// Lowercases the title and replaces each whitespace run with a single
/// underscore. Leading and trailing whitespace become underscores too.
///
/// # Arguments
///
/// * `title`: Section title as typed by the user
///
/// # Returns
///
/// Key used in the section order
pub fn section_key(title: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&title.to_lowercase(), "_")
        .into_owned()
}

/// Shortens a URL for display by dropping `http(s)://` and `www.`.
pub fn display_url(url: &str) -> String {
    URL_SCHEME_PREFIX.replace(url, "").into_owned()
}

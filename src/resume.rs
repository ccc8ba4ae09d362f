//! Resume document model and editing operations.
//!
//! A resume is a JSON document with camelCase keys. Sections render in the
//! order stored in `sectionOrder`; when that list is empty the default
//! order applies.

mod model;
mod section;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use model::{
    Achievement, Certification, CustomItem, CustomSection, Education, Experience, Link,
    PageBreak, PersonalInfo, Project, Skill,
};
pub use section::{DEFAULT_SECTION_ORDER, SectionId};

use crate::util::section_key;

const SAMPLE_RESUME: &str = include_str!("../assets/sample-resume.json");

/// Complete resume document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub achievements: Vec<Achievement>,
    pub custom_sections: Vec<CustomSection>,
    pub page_breaks: Vec<PageBreak>,
    pub section_order: Vec<SectionId>,
}

impl Resume {
    /// Parses a resume from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid JSON or a field has the wrong type
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse resume JSON")
    }

    /// Loads a resume from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid resume: {}", path.display()))
    }

    /// Returns the bundled sample resume.
    ///
    /// # Errors
    ///
    /// Returns error if the bundled document fails to parse
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_RESUME).context("Bundled sample resume is invalid")
    }

    /// Serializes the resume as pretty printed JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize resume")
    }

    /// Returns the stored section order, or the default order when empty.
    pub fn effective_section_order(&self) -> Vec<SectionId> {
        if self.section_order.is_empty() {
            DEFAULT_SECTION_ORDER.to_vec()
        } else {
            self.section_order.clone()
        }
    }

    /// Replaces the section order.
    pub fn set_section_order(&mut self, order: Vec<SectionId>) {
        self.section_order = order;
    }

    /// Swaps the section at `index` with the one above it.
    ///
    /// Returns `false` without changes when `index` is the first section or
    /// out of range.
    pub fn move_section_up(&mut self, index: usize) -> bool {
        let mut order = self.effective_section_order();
        if index == 0 || index >= order.len() {
            return false;
        }

        order.swap(index, index - 1);
        self.section_order = order;
        true
    }

    /// Swaps the section at `index` with the one below it.
    ///
    /// Returns `false` without changes when `index` is the last section or
    /// out of range.
    pub fn move_section_down(&mut self, index: usize) -> bool {
        let mut order = self.effective_section_order();
        if index >= order.len().saturating_sub(1) {
            return false;
        }

        order.swap(index, index + 1);
        self.section_order = order;
        true
    }

    /// Adds an empty custom section and returns its key.
    ///
    /// The key is the title lowercased with whitespace runs replaced by `_`.
    /// The section order is left untouched; callers place the key
    /// themselves.
    pub fn add_custom_section(&mut self, title: &str) -> String {
        let key = section_key(title);
        self.custom_sections.push(CustomSection {
            key: key.clone(),
            title: title.to_string(),
            items: Vec::new(),
        });
        key
    }

    /// Removes every custom section with `key`.
    pub fn remove_custom_section(&mut self, key: &str) {
        self.custom_sections.retain(|section| section.key != key);
    }

    /// Finds the custom section stored under `key`.
    pub fn custom_section(&self, key: &str) -> Option<&CustomSection> {
        self.custom_sections.iter().find(|section| section.key == key)
    }
}

/// Replaces the item at `index` in a section list.
///
/// # Errors
///
/// Returns error if `index` is out of range
pub fn replace_item<T>(items: &mut [T], index: usize, item: T) -> Result<()> {
    let len = items.len();
    let Some(slot) = items.get_mut(index) else {
        bail!("Item index {} out of range for section with {} items", index, len);
    };
    *slot = item;
    Ok(())
}

/// Removes and returns the item at `index` in a section list.
///
/// # Errors
///
/// Returns error if `index` is out of range
pub fn remove_item<T>(items: &mut Vec<T>, index: usize) -> Result<T> {
    if index >= items.len() {
        bail!(
            "Item index {} out of range for section with {} items",
            index,
            items.len()
        );
    }
    Ok(items.remove(index))
}

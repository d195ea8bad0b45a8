//! Document-level types.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DocumentElement, ElementKind};
use crate::error::Result;

/// Metadata key for the source file name.
pub const META_FILE_NAME: &str = "fileName";
/// Metadata key for the document title.
pub const META_TITLE: &str = "title";
/// Metadata key for the document author.
pub const META_AUTHOR: &str = "author";
/// Metadata key for the document subject.
pub const META_SUBJECT: &str = "subject";

/// The extracted content of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    /// Document metadata (file name, title, author, subject)
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    /// Elements in reading order
    #[serde(default)]
    pub elements: Vec<DocumentElement>,
}

impl DocumentInfo {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load document information from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save document information to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set a metadata value, skipping blank values.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.metadata.insert(key.into(), value);
        }
    }

    /// Get a metadata value.
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Append elements in reading order.
    pub fn extend(&mut self, elements: impl IntoIterator<Item = DocumentElement>) {
        self.elements.extend(elements);
    }

    /// Check if the document has any elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Count the elements of one kind.
    pub fn count_kind(&self, kind: ElementKind) -> usize {
        self.elements.iter().filter(|e| e.kind == kind).count()
    }

    /// Get the text of every text element, joined in reading order.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter(|e| e.kind == ElementKind::Text)
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

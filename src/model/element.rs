//! Document elements handed to the downstream consumer.

use serde::{Deserialize, Serialize};

use super::page::page_label;

/// Kind of a document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Coalesced text
    #[default]
    Text,
    /// Image, carried as its description
    Image,
    /// Anything else
    Other,
}

impl ElementKind {
    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Other => "other",
        }
    }
}

/// A unit of document content in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentElement {
    /// Element kind
    #[serde(rename = "type")]
    pub kind: ElementKind,

    /// Position label ("Page 3"), if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Element text (for images, the description)
    #[serde(default)]
    pub text: String,
}

impl DocumentElement {
    /// Create a new element.
    pub fn new(kind: ElementKind, position: Option<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
        }
    }

    /// Create a text element on a page.
    pub fn text(page: u32, text: impl Into<String>) -> Self {
        Self::new(ElementKind::Text, Some(page_label(page)), text)
    }

    /// Create an image element on a page.
    pub fn image(page: u32, description: impl Into<String>) -> Self {
        Self::new(ElementKind::Image, Some(page_label(page)), description)
    }
}

//! Page-level types.

use super::Primitive;

/// The unordered primitives of a single page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    /// Page number (1-indexed)
    pub number: u32,

    /// Primitives in extraction order (carries no reading order)
    pub primitives: Vec<Primitive>,
}

impl PageLayout {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            primitives: Vec::new(),
        }
    }

    /// Create a page from its primitives.
    pub fn with_primitives(number: u32, primitives: Vec<Primitive>) -> Self {
        Self { number, primitives }
    }

    /// Add a primitive to the page.
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Check if the page has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Get the number of primitives on the page.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Number of image primitives on the page.
    pub fn image_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_image()).count()
    }

    /// Position label shared by every element of this page.
    pub fn label(&self) -> String {
        page_label(self.number)
    }
}

/// Position label for a page ("Page 3").
pub fn page_label(number: u32) -> String {
    format!("Page {}", number)
}

//! # doclint
//!
//! Reading-order reconstruction and element extraction for document linting.
//!
//! Document decoders hand out text blocks and images with bounding boxes, in
//! no useful order. This library puts them back into the order a person
//! would read them and folds them into a linear list of text and image
//! elements, ready to be shown to a language model.
//!
//! ## Quick Start
//!
//! ```no_run
//! use doclint::{parse_layout_file, AnalysisConfig, BoxError};
//!
//! fn main() -> doclint::Result<()> {
//!     let describe = |image: &[u8], mime: &str, _: &AnalysisConfig| -> Result<String, BoxError> {
//!         Ok(format!("{} image, {} bytes", mime, image.len()))
//!     };
//!
//!     let doc = parse_layout_file("layout.json", &describe)?;
//!     for element in &doc.elements {
//!         println!("{:?} {:?}: {}", element.kind, element.position, element.text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`order`]: interval relations, precedence graph, greedy linearization
//! - [`parser`]: per-page ordering and coalescing into [`DocumentElement`]s
//! - [`describe`]: the image description collaborator
//! - [`render`]: JSON output and model context sentences

pub mod config;
pub mod describe;
pub mod error;
pub mod model;
pub mod order;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use config::AnalysisConfig;
pub use describe::{ImageDescriber, ImagePrompt};
pub use error::{BoxError, Error, Result};
pub use model::{
    Axis, Bounded, DocumentElement, DocumentInfo, ElementKind, ImagePrimitive, PageLayout,
    Primitive, Rect, TextPrimitive,
};
pub use order::{reading_order, IntervalRelation, Linearizer, PrecedenceGraph, DEFAULT_TOLERANCE};
pub use parser::{
    DocumentParser, LayoutFile, MemorySource, PageSelection, ParseOptions, PrimitiveSource,
};
pub use render::{context_lines, JsonFormat};

use std::path::Path;

/// Extract the elements of a document with default options.
///
/// # Example
///
/// ```no_run
/// use doclint::{extract, AnalysisConfig, BoxError, MemorySource};
///
/// let describe = |_: &[u8], _: &str, _: &AnalysisConfig| -> Result<String, BoxError> {
///     Ok("an image".to_string())
/// };
/// let doc = extract(&MemorySource::new(), &describe).unwrap();
/// assert!(doc.is_empty());
/// ```
pub fn extract(source: &dyn PrimitiveSource, describer: &dyn ImageDescriber) -> Result<DocumentInfo> {
    DocumentParser::new(describer).parse(source)
}

/// Extract the elements of a document with custom configuration and options.
pub fn extract_with_options(
    source: &dyn PrimitiveSource,
    describer: &dyn ImageDescriber,
    config: AnalysisConfig,
    options: ParseOptions,
) -> Result<DocumentInfo> {
    DocumentParser::new(describer)
        .with_config(config)
        .with_options(options)
        .parse(source)
}

/// Extract the elements of a JSON layout file.
///
/// See [`LayoutFile`] for the file format.
pub fn parse_layout_file<P: AsRef<Path>>(
    path: P,
    describer: &dyn ImageDescriber,
) -> Result<DocumentInfo> {
    let source = LayoutFile::open(path)?;
    extract(&source, describer)
}

/// Builder for extracting documents.
///
/// # Example
///
/// ```no_run
/// use doclint::{AnalysisConfig, BoxError, Doclint};
///
/// let describe = |_: &[u8], _: &str, _: &AnalysisConfig| -> Result<String, BoxError> {
///     Ok("an image".to_string())
/// };
/// let json = Doclint::new(&describe)
///     .with_tolerance(3.0)
///     .sequential()
///     .parse("layout.json")?
///     .to_json(doclint::JsonFormat::Pretty)?;
/// # Ok::<(), doclint::Error>(())
/// ```
pub struct Doclint<'a> {
    describer: &'a dyn ImageDescriber,
    config: AnalysisConfig,
    options: ParseOptions,
}

impl<'a> Doclint<'a> {
    /// Create a new builder around an image describer.
    pub fn new(describer: &'a dyn ImageDescriber) -> Self {
        Self {
            describer,
            config: AnalysisConfig::default(),
            options: ParseOptions::default(),
        }
    }

    /// Set the analysis configuration.
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the ordering tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.options = self.options.with_tolerance(tolerance);
        self
    }

    /// Disable parallel page ordering.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.options = self.options.with_pages(pages);
        self
    }

    /// Parse a JSON layout file.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<DoclintResult> {
        let source = LayoutFile::open(path)?;
        self.parse_source(&source)
    }

    /// Parse any primitive source.
    pub fn parse_source(self, source: &dyn PrimitiveSource) -> Result<DoclintResult> {
        let document =
            extract_with_options(source, self.describer, self.config, self.options)?;
        Ok(DoclintResult { document })
    }
}

/// Result of extracting a document.
pub struct DoclintResult {
    /// The extracted document
    pub document: DocumentInfo,
}

impl DoclintResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Context sentences for a language model.
    pub fn context_lines(&self) -> Vec<String> {
        render::context_lines(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &DocumentInfo {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(_: &[u8], mime: &str, _: &AnalysisConfig) -> std::result::Result<String, BoxError> {
        Ok(format!("an {} image", mime))
    }

    fn source() -> MemorySource {
        let rect = |top: f64| Rect::new(0.0, top, 100.0, top + 10.0).unwrap();
        MemorySource::from_pages(vec![PageLayout::with_primitives(
            1,
            vec![
                Primitive::text(rect(40.0), "second block"),
                Primitive::text(rect(0.0), "first block"),
                Primitive::image(rect(20.0), vec![1, 2, 3], "image/png"),
            ],
        )])
    }

    #[test]
    fn test_extract() {
        let doc = extract(&source(), &describe).unwrap();
        assert_eq!(doc.elements.len(), 3);
        assert_eq!(doc.elements[1].text, "an image/png image");
    }

    #[test]
    fn test_builder_defaults() {
        let builder = Doclint::new(&describe);
        assert_eq!(builder.options.tolerance, DEFAULT_TOLERANCE);
        assert!(builder.options.parallel);
        assert_eq!(builder.config.image_model, "llava");
    }

    #[test]
    fn test_builder_chained() {
        let builder = Doclint::new(&describe)
            .with_tolerance(1.5)
            .sequential()
            .with_pages(PageSelection::Range(1..=2))
            .with_config(AnalysisConfig::new().with_image_model("vision"));

        assert_eq!(builder.options.tolerance, 1.5);
        assert!(!builder.options.parallel);
        assert!(matches!(builder.options.pages, PageSelection::Range(_)));
        assert_eq!(builder.config.image_model, "vision");
    }

    #[test]
    fn test_builder_parse_source() {
        let result = Doclint::new(&describe).parse_source(&source()).unwrap();
        assert_eq!(result.document().elements.len(), 3);
        assert_eq!(result.context_lines().len(), 3);
        assert!(result.to_json(JsonFormat::Compact).unwrap().contains("first block"));
    }

    #[test]
    fn test_parse_missing_layout_file() {
        let result = Doclint::new(&describe).parse("/nonexistent/layout.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

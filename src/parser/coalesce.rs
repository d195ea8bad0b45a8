//! Folding ordered primitives into document elements.

use crate::config::AnalysisConfig;
use crate::describe::ImageDescriber;
use crate::error::{Error, Result};
use crate::model::{DocumentElement, ImagePrimitive, Primitive};

/// Merges runs of text primitives and turns images into described elements.
pub struct Coalescer<'a> {
    describer: &'a dyn ImageDescriber,
    config: &'a AnalysisConfig,
}

impl<'a> Coalescer<'a> {
    /// Create a coalescer around an image describer.
    pub fn new(describer: &'a dyn ImageDescriber, config: &'a AnalysisConfig) -> Self {
        Self { describer, config }
    }

    /// Coalesce one page of primitives, given in reading order.
    ///
    /// Consecutive text primitives become a single text element, one line per
    /// primitive. An image flushes the pending text before its own element is
    /// emitted; the page end flushes whatever text is left.
    pub fn coalesce<I>(&self, page: u32, primitives: I) -> Result<Vec<DocumentElement>>
    where
        I: IntoIterator<Item = Primitive>,
    {
        let mut elements = Vec::new();
        let mut buffer = String::new();

        for primitive in primitives {
            match primitive {
                Primitive::Text(text) => {
                    buffer.push_str(&text.text);
                    buffer.push('\n');
                }
                Primitive::Image(image) => {
                    flush(&mut buffer, page, &mut elements);
                    let description = self.describe(page, &image)?;
                    elements.push(DocumentElement::image(page, description));
                }
            }
        }

        flush(&mut buffer, page, &mut elements);
        Ok(elements)
    }

    fn describe(&self, page: u32, image: &ImagePrimitive) -> Result<String> {
        log::debug!(
            "Describing {} image ({} bytes) on page {}",
            image.mime_type,
            image.data.len(),
            page
        );
        self.describer
            .describe(&image.data, &image.mime_type, self.config)
            .map_err(|source| Error::ImageDescriptionFailed { page, source })
    }
}

fn flush(buffer: &mut String, page: u32, elements: &mut Vec<DocumentElement>) {
    if !buffer.is_empty() {
        elements.push(DocumentElement::text(page, std::mem::take(buffer)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::model::{ElementKind, Rect};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    fn text(s: &str) -> Primitive {
        Primitive::text(rect(), s)
    }

    fn image() -> Primitive {
        Primitive::image(rect(), vec![0xde, 0xad], "image/png")
    }

    fn fixed(_: &[u8], _: &str, _: &AnalysisConfig) -> std::result::Result<String, BoxError> {
        Ok("a described image".to_string())
    }

    #[test]
    fn test_text_then_image() {
        let config = AnalysisConfig::default();
        let coalescer = Coalescer::new(&fixed, &config);
        let elements = coalescer
            .coalesce(1, vec![text("A"), text("B"), image()])
            .unwrap();

        assert_eq!(
            elements,
            vec![
                DocumentElement::text(1, "A\nB\n"),
                DocumentElement::image(1, "a described image"),
            ]
        );
    }

    #[test]
    fn test_text_only_page() {
        let config = AnalysisConfig::default();
        let coalescer = Coalescer::new(&fixed, &config);
        let elements = coalescer.coalesce(3, vec![text("A"), text("B")]).unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind, ElementKind::Text);
        assert_eq!(elements[0].text, "A\nB\n");
        assert_eq!(elements[0].position.as_deref(), Some("Page 3"));
    }

    #[test]
    fn test_consecutive_images_emit_no_empty_text() {
        let config = AnalysisConfig::default();
        let coalescer = Coalescer::new(&fixed, &config);
        let elements = coalescer
            .coalesce(1, vec![image(), image(), text("tail")])
            .unwrap();

        let kinds: Vec<ElementKind> = elements.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::Image, ElementKind::Image, ElementKind::Text]
        );
    }

    #[test]
    fn test_empty_page() {
        let config = AnalysisConfig::default();
        let coalescer = Coalescer::new(&fixed, &config);
        assert!(coalescer.coalesce(1, Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_describer_receives_bytes_and_config() {
        let config = AnalysisConfig::new().with_image_model("vision");
        let describer = |image: &[u8], mime: &str, config: &AnalysisConfig| -> std::result::Result<String, BoxError> {
            Ok(format!("{}:{}:{}", config.image_model, mime, image.len()))
        };
        let coalescer = Coalescer::new(&describer, &config);
        let elements = coalescer.coalesce(1, vec![image()]).unwrap();
        assert_eq!(elements[0].text, "vision:image/png:2");
    }

    #[test]
    fn test_failure_stops_page() {
        let calls = AtomicUsize::new(0);
        let failing = |_: &[u8], _: &str, _: &AnalysisConfig| -> std::result::Result<String, BoxError> {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("model unavailable".into())
        };
        let config = AnalysisConfig::default();
        let coalescer = Coalescer::new(&failing, &config);

        let result = coalescer.coalesce(2, vec![text("A"), image(), image(), text("B")]);
        match result {
            Err(Error::ImageDescriptionFailed { page, source }) => {
                assert_eq!(page, 2);
                assert_eq!(source.to_string(), "model unavailable");
            }
            other => panic!("expected ImageDescriptionFailed, got {:?}", other),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

//! Describing document elements as model context.
//!
//! A document is presented to a language model one element at a time, each
//! as a sentence locating it ("The first item on Page 2 of the document ...").

use crate::model::{DocumentInfo, ElementKind};

/// Render one context sentence per element, in reading order.
///
/// The first element of each new position is introduced as "first", the
/// rest as "next".
pub fn context_lines(doc: &DocumentInfo) -> Vec<String> {
    let mut lines = Vec::with_capacity(doc.elements.len());
    let mut position: Option<&str> = None;

    for (i, element) in doc.elements.iter().enumerate() {
        let current = element.position.as_deref();
        let order = if i == 0 || current != position {
            "first"
        } else {
            "next"
        };
        position = current;

        let location = match current {
            Some(pos) => format!("The {} item on {} of the document", order, pos),
            None => format!("The {} item of the document", order),
        };
        let what = match element.kind {
            ElementKind::Text => "the text",
            ElementKind::Image => "an image",
            ElementKind::Other => "an element",
        };

        lines.push(format!(
            "{} is {} containing the following: {}",
            location, what, element.text
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentElement;

    #[test]
    fn test_context_lines() {
        let mut doc = DocumentInfo::new();
        doc.extend([
            DocumentElement::text(1, "Intro"),
            DocumentElement::image(1, "A cat on grass"),
            DocumentElement::text(2, "Body"),
            DocumentElement::new(ElementKind::Other, None, "Footnote"),
        ]);

        let lines = context_lines(&doc);
        assert_eq!(
            lines,
            vec![
                "The first item on Page 1 of the document is the text containing the following: Intro",
                "The next item on Page 1 of the document is an image containing the following: A cat on grass",
                "The first item on Page 2 of the document is the text containing the following: Body",
                "The first item of the document is an element containing the following: Footnote",
            ]
        );
    }

    #[test]
    fn test_unpositioned_elements_share_position() {
        let mut doc = DocumentInfo::new();
        doc.extend([
            DocumentElement::new(ElementKind::Text, None, "a"),
            DocumentElement::new(ElementKind::Text, None, "b"),
        ]);
        let lines = context_lines(&doc);
        assert!(lines[0].starts_with("The first item of the document"));
        assert!(lines[1].starts_with("The next item of the document"));
    }

    #[test]
    fn test_opening_element_is_first_without_position() {
        // The opening element is always "first", positioned or not
        let mut doc = DocumentInfo::new();
        doc.extend([
            DocumentElement::new(ElementKind::Image, None, "logo"),
            DocumentElement::text(1, "Title"),
        ]);
        let lines = context_lines(&doc);
        assert_eq!(
            lines[0],
            "The first item of the document is an image containing the following: logo"
        );
        assert!(lines[1].starts_with("The first item on Page 1"));
    }

    #[test]
    fn test_empty_document() {
        assert!(context_lines(&DocumentInfo::new()).is_empty());
    }
}

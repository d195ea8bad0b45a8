//! Document model types.
//!
//! This module defines the types flowing through the extraction pipeline:
//! positioned primitives coming in from the extraction layer, and ordered
//! document elements going out to the downstream consumer.

mod document;
mod element;
mod geometry;
mod page;
mod primitive;

pub use document::{DocumentInfo, META_AUTHOR, META_FILE_NAME, META_SUBJECT, META_TITLE};
pub use element::{DocumentElement, ElementKind};
pub use geometry::{Axis, Bounded, Rect, Span};
pub use page::{page_label, PageLayout};
pub use primitive::{ImagePrimitive, Primitive, TextPrimitive, DEFAULT_IMAGE_TYPE};

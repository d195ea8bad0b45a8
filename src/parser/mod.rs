//! Element extraction: ordering each page and coalescing its primitives.

mod coalesce;
mod document_parser;
mod options;
mod source;

pub use coalesce::Coalescer;
pub use document_parser::DocumentParser;
pub use options::{PageSelection, ParseOptions};
pub use source::{mime_type_for_path, LayoutFile, MemorySource, PrimitiveSource};

//! Rendering extracted documents for downstream consumers.

mod context;
mod json;

pub use context::context_lines;
pub use json::{to_json, write_json, JsonFormat};

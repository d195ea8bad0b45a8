//! JSON rendering for extracted documents.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::DocumentInfo;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Render a document as a JSON string.
pub fn to_json(doc: &DocumentInfo, format: JsonFormat) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(doc, format, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| Error::Render(e.to_string()))
}

/// Write a document as JSON to any writer, followed by a newline.
pub fn write_json<W: Write>(doc: &DocumentInfo, format: JsonFormat, mut writer: W) -> Result<()> {
    let written = match format {
        JsonFormat::Pretty => serde_json::to_writer_pretty(&mut writer, doc),
        JsonFormat::Compact => serde_json::to_writer(&mut writer, doc),
    };
    written.map_err(|e| Error::Render(format!("cannot write document JSON: {}", e)))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

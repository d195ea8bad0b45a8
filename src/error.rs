//! Error types for the doclint library.

use std::io;
use thiserror::Error;

/// Result type alias for doclint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by external collaborators such as image describers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types that can occur while extracting document elements.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A bounding box with inverted bounds or non-finite coordinates.
    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    /// The ordering tolerance is negative or not finite.
    #[error("Invalid tolerance: {0} (must be finite and >= 0)")]
    InvalidTolerance(f64),

    /// The image description service failed.
    #[error("Image description failed on page {page}: {source}")]
    ImageDescriptionFailed {
        /// Page the image was found on (1-indexed)
        page: u32,
        /// Error reported by the describer
        #[source]
        source: BoxError,
    },

    /// The page layout source is invalid or incomplete.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Invalid analysis configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid page range string.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

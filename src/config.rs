//! Analysis configuration shared with the language-model collaborators.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default model used to assess document text.
pub const DEFAULT_DOCUMENT_MODEL: &str = "llama3";

/// Default model used to describe images.
pub const DEFAULT_IMAGE_MODEL: &str = "llava";

/// Models and context passed to the language-model collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Document analysis model name (e.g. "llama3")
    pub document_model: String,

    /// Image analysis model name (e.g. "llava")
    pub image_model: String,

    /// Context statements given to every model request
    pub context: Vec<String>,
}

impl AnalysisConfig {
    /// Create a configuration with default models and no context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both model names are set.
    pub fn validate(&self) -> Result<()> {
        if self.document_model.trim().is_empty() {
            return Err(Error::Config("documentModel must not be empty".to_string()));
        }
        if self.image_model.trim().is_empty() {
            return Err(Error::Config("imageModel must not be empty".to_string()));
        }
        Ok(())
    }

    /// Set the document model.
    pub fn with_document_model(mut self, model: impl Into<String>) -> Self {
        self.document_model = model.into();
        self
    }

    /// Set the image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Add a context statement.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            document_model: DEFAULT_DOCUMENT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            context: Vec::new(),
        }
    }
}

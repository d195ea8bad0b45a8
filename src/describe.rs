//! Image description collaborator.
//!
//! The pipeline never interprets image bytes itself: every image primitive is
//! handed to an [`ImageDescriber`], and the returned text becomes the image
//! element. Implementations typically call out to a vision language model,
//! using [`ImagePrompt`] to build the request.

use crate::config::AnalysisConfig;
use crate::error::BoxError;

/// User message asking a model to describe an image.
pub const DESCRIBE_PROMPT: &str = "Please describe the contents of this image.";

/// Describes images as text.
///
/// Calls may be slow and may fail; failures abort the document being parsed.
pub trait ImageDescriber: Send + Sync {
    /// Describe one image.
    fn describe(
        &self,
        image: &[u8],
        mime_type: &str,
        config: &AnalysisConfig,
    ) -> Result<String, BoxError>;
}

impl<F> ImageDescriber for F
where
    F: Fn(&[u8], &str, &AnalysisConfig) -> Result<String, BoxError> + Send + Sync,
{
    fn describe(
        &self,
        image: &[u8],
        mime_type: &str,
        config: &AnalysisConfig,
    ) -> Result<String, BoxError> {
        self(image, mime_type, config)
    }
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// Context supplied by the caller
    System,
    /// The question being asked
    User,
}

impl ChatRole {
    /// Lowercase role name as used by chat APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Message role
    pub role: ChatRole,
    /// Message text
    pub content: String,
}

/// The chat request an LM-backed describer sends for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePrompt {
    /// Model to ask
    pub model: String,
    /// Context messages followed by the describe request
    pub messages: Vec<ChatMessage>,
}

impl ImagePrompt {
    /// Build the prompt for a configuration.
    ///
    /// Every context statement becomes a system message; the final user
    /// message is [`DESCRIBE_PROMPT`], which the image is attached to.
    pub fn new(config: &AnalysisConfig) -> Self {
        let mut messages: Vec<ChatMessage> = config
            .context
            .iter()
            .map(|c| ChatMessage {
                role: ChatRole::System,
                content: c.clone(),
            })
            .collect();
        messages.push(ChatMessage {
            role: ChatRole::User,
            content: DESCRIBE_PROMPT.to_string(),
        });

        Self {
            model: config.image_model.clone(),
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_describer() {
        let describer = |image: &[u8], mime: &str, _: &AnalysisConfig| -> Result<String, BoxError> {
            Ok(format!("{} bytes of {}", image.len(), mime))
        };
        let description = describer
            .describe(&[1, 2, 3], "image/png", &AnalysisConfig::default())
            .unwrap();
        assert_eq!(description, "3 bytes of image/png");
    }

    #[test]
    fn test_boxed_describer() {
        let describer: Box<dyn ImageDescriber> =
            Box::new(|_: &[u8], _: &str, _: &AnalysisConfig| -> Result<String, BoxError> {
                Err("offline".into())
            });
        let err = describer
            .describe(&[], "image/png", &AnalysisConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "offline");
    }

    #[test]
    fn test_image_prompt() {
        let config = AnalysisConfig::new()
            .with_image_model("llava:13b")
            .with_context("This is a user manual")
            .with_context("Screenshots show a game");
        let prompt = ImagePrompt::new(&config);

        assert_eq!(prompt.model, "llava:13b");
        assert_eq!(prompt.messages.len(), 3);
        assert_eq!(prompt.messages[0].role, ChatRole::System);
        assert_eq!(prompt.messages[1].content, "Screenshots show a game");
        assert_eq!(prompt.messages[2].role, ChatRole::User);
        assert_eq!(prompt.messages[2].content, DESCRIBE_PROMPT);
    }

    #[test]
    fn test_image_prompt_without_context() {
        let prompt = ImagePrompt::new(&AnalysisConfig::default());
        assert_eq!(prompt.model, "llava");
        assert_eq!(prompt.messages.len(), 1);
        assert_eq!(prompt.messages[0].role.as_str(), "user");
    }
}

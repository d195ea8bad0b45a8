//! Image describer backed by an Ollama chat endpoint.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use doclint::describe::ChatRole;
use doclint::{AnalysisConfig, BoxError, ImageDescriber, ImagePrompt};

/// Default Ollama server address.
pub const DEFAULT_URL: &str = "http://localhost:11434";

/// Describes images by asking a vision model served by Ollama.
pub struct OllamaDescriber {
    endpoint: String,
    client: reqwest::blocking::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaDescriber {
    /// Create a describer for a server address.
    pub fn new(base_url: &str) -> reqwest::Result<Self> {
        // Vision models can take minutes on CPU
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(600))
            .build()?;
        Ok(Self {
            endpoint: chat_endpoint(base_url),
            client,
        })
    }
}

impl ImageDescriber for OllamaDescriber {
    fn describe(
        &self,
        image: &[u8],
        _mime_type: &str,
        config: &AnalysisConfig,
    ) -> Result<String, BoxError> {
        let prompt = ImagePrompt::new(config);
        let request = build_request(&prompt, image);

        log::debug!("POST {} (model {})", self.endpoint, prompt.model);
        let response: ChatResponse = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.message.content)
    }
}

fn chat_endpoint(base_url: &str) -> String {
    format!("{}/api/chat", base_url.trim_end_matches('/'))
}

fn build_request<'a>(prompt: &'a ImagePrompt, image: &[u8]) -> ChatRequest<'a> {
    let encoded = STANDARD.encode(image);
    let last = prompt.messages.len().saturating_sub(1);

    let messages = prompt
        .messages
        .iter()
        .enumerate()
        .map(|(i, m)| Message {
            role: m.role.as_str(),
            content: &m.content,
            // The image rides on the final user message
            images: if i == last && m.role == ChatRole::User {
                vec![encoded.clone()]
            } else {
                Vec::new()
            },
        })
        .collect();

    ChatRequest {
        model: &prompt.model,
        messages,
        stream: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_endpoint() {
        assert_eq!(
            chat_endpoint("http://localhost:11434/"),
            "http://localhost:11434/api/chat"
        );
        assert_eq!(chat_endpoint("http://gpu:8080"), "http://gpu:8080/api/chat");
    }

    #[test]
    fn test_build_request() {
        let config = AnalysisConfig::new().with_context("A game manual");
        let prompt = ImagePrompt::new(&config);
        let request = build_request(&prompt, b"abc");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "llava");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert!(json["messages"][0].get("images").is_none());
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["images"][0], "YWJj");
    }
}

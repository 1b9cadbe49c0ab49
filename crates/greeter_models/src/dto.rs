//! Request payloads for the supported providers.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI chat completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f64,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// Prompt wrapper used by the Gemini `generateText` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextPrompt {
    /// Full instruction text
    pub text: String,
}

/// Gemini `generateText` request.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTextRequest {
    /// Prompt text
    prompt: TextPrompt,
    /// Sampling temperature
    temperature: f64,
    /// Maximum output tokens
    max_output_tokens: u32,
}

impl GenerateTextRequest {
    /// Creates a request for `text`.
    pub fn new(text: impl Into<String>, temperature: f64, max_output_tokens: u32) -> Self {
        Self {
            prompt: TextPrompt { text: text.into() },
            temperature,
            max_output_tokens,
        }
    }
}

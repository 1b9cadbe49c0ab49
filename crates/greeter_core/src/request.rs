//! Request and response types for message generation.

use crate::{Occasion, ProviderKind};
use derive_getters::Getters;
use greeter_error::ValidationError;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

/// Which provider the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderPreference {
    /// No usable `provider` field; resolve from configuration.
    Auto,
    /// A supported provider, matched case-insensitively.
    Named(ProviderKind),
    /// Unrecognised name or non-text value. Always falls back.
    Unknown(String),
}

/// A single generation request, validated from the raw JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Free-text prompt
    prompt: String,
    /// Whether the caller opted into provider generation
    use_llm: bool,
    /// Requested provider
    provider: ProviderPreference,
}

impl GenerationRequest {
    /// Creates a request directly, bypassing JSON validation.
    pub fn new(prompt: impl Into<String>, use_llm: bool, provider: ProviderPreference) -> Self {
        Self {
            prompt: prompt.into(),
            use_llm,
            provider,
        }
    }

    /// Validates a decoded body of shape `{prompt, useLLM, provider}`.
    ///
    /// Anything other than an object with a string `prompt` is rejected.
    /// `useLLM` follows truthiness rules so `1` or `"yes"` opt in as well.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let prompt = body
            .get("prompt")
            .and_then(Value::as_str)
            .ok_or_else(ValidationError::prompt_required)?;

        let use_llm = body.get("useLLM").is_some_and(is_truthy);

        let provider = match body.get("provider") {
            None | Some(Value::Null) => ProviderPreference::Auto,
            Some(Value::String(name)) if name.is_empty() => ProviderPreference::Auto,
            Some(Value::String(name)) => match ProviderKind::from_str(name) {
                Ok(kind) => ProviderPreference::Named(kind),
                Err(_) => ProviderPreference::Unknown(name.to_lowercase()),
            },
            Some(other) => ProviderPreference::Unknown(other.to_string()),
        };

        Ok(Self {
            prompt: prompt.to_string(),
            use_llm,
            provider,
        })
    }

    /// The prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether provider generation was requested.
    pub fn use_llm(&self) -> bool {
        self.use_llm
    }

    /// The requested provider.
    pub fn provider(&self) -> &ProviderPreference {
        &self.provider
    }

    /// Parses raw body bytes. Empty or malformed JSON counts as `{}`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        let body = serde_json::from_slice::<Value>(bytes).unwrap_or(Value::Null);
        Self::from_json(&body)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Where a message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// Text returned by a provider
    Provider(ProviderKind),
    /// Template chosen by the keyword classifier
    Fallback(Occasion),
}

/// The message returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GenerationResult {
    /// Generated text or template
    message: String,
    /// Origin of the message (not serialized)
    #[serde(skip)]
    source: MessageSource,
}

impl GenerationResult {
    /// Message produced by a provider.
    pub fn from_provider(kind: ProviderKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: MessageSource::Provider(kind),
        }
    }

    /// Message produced by the rule-based classifier.
    pub fn from_fallback(prompt: &str) -> Self {
        let occasion = crate::classify(prompt);
        Self {
            message: occasion.template().to_string(),
            source: MessageSource::Fallback(occasion),
        }
    }

    /// Consumes the result, returning the message text.
    pub fn into_message(self) -> String {
        self.message
    }
}

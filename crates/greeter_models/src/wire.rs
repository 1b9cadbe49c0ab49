//! Per-provider wire details: endpoints, payloads and response paths.

use crate::{ChatMessage, ChatRequest, GenerateTextRequest, ProviderSettings};
use greeter_core::ProviderKind;
use greeter_error::{ProviderError, ProviderErrorKind};
use serde_json::Value;

/// Sampling temperature sent to every provider.
pub const TEMPERATURE: f64 = 0.7;

/// Output token cap sent to every provider.
pub const MAX_OUTPUT_TOKENS: u32 = 120;

const STYLE_DIRECTIVE: &str = "You are a helpful assistant that writes short, friendly customer messages. Keep it under 40 words and include a {name} placeholder";

const GEMINI_TEXT_PATHS: &[&str] = &[
    "/candidates/0/output",
    "/candidates/0/content",
    "/candidates/0/content/parts/0/text",
    "/candidates/0/text",
    "/output/0/content",
    "/output/0/text",
    "/result",
];

const OPENAI_TEXT_PATHS: &[&str] = &[
    "/choices/0/message/content",
    "/choices/0/text",
    "/candidates/0/output",
];

/// Environment variable that must hold the provider's API key.
pub fn api_key_var(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Gemini => "GEMINI_API_KEY",
        ProviderKind::OpenAi => "OPENAI_API_KEY",
    }
}

/// Model used when no override is configured.
pub fn default_model(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Gemini => "gemini-1.3",
        ProviderKind::OpenAi => "gpt-4o-mini",
    }
}

/// Public API host.
pub fn default_base_url(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Gemini => "https://generativelanguage.googleapis.com",
        ProviderKind::OpenAi => "https://api.openai.com",
    }
}

/// Full request URL, excluding any query-string credentials.
pub fn endpoint(settings: &ProviderSettings) -> String {
    let base = settings.base_url().trim_end_matches('/');
    match settings.kind() {
        ProviderKind::Gemini => format!(
            "{}/v1beta2/models/{}:generateText",
            base,
            settings.model()
        ),
        ProviderKind::OpenAi => format!("{}/v1/chat/completions", base),
    }
}

/// JSON Pointer paths probed, in order, for the generated text.
pub fn text_paths(kind: ProviderKind) -> &'static [&'static str] {
    match kind {
        ProviderKind::Gemini => GEMINI_TEXT_PATHS,
        ProviderKind::OpenAi => OPENAI_TEXT_PATHS,
    }
}

/// Builds the provider-specific JSON payload for `prompt`.
pub fn payload(settings: &ProviderSettings, prompt: &str) -> Result<Value, ProviderError> {
    let kind = *settings.kind();
    let body = match kind {
        ProviderKind::Gemini => {
            let instruction = format!(
                "{} where appropriate. Create a single short message for this prompt: {}",
                STYLE_DIRECTIVE, prompt
            );
            serde_json::to_value(GenerateTextRequest::new(
                instruction,
                TEMPERATURE,
                MAX_OUTPUT_TOKENS,
            ))
        }
        ProviderKind::OpenAi => {
            let request = ChatRequest::builder()
                .model(settings.model().clone())
                .messages(vec![
                    ChatMessage::system(format!("{}.", STYLE_DIRECTIVE)),
                    ChatMessage::user(format!("Create a short customer message for: {}", prompt)),
                ])
                .max_tokens(MAX_OUTPUT_TOKENS)
                .temperature(TEMPERATURE)
                .build()
                .map_err(|e| {
                    ProviderError::new(
                        kind.name(),
                        ProviderErrorKind::Builder(format!("Failed to build request: {}", e)),
                    )
                })?;
            serde_json::to_value(request)
        }
    };

    body.map_err(|e| ProviderError::new(kind.name(), ProviderErrorKind::Builder(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_endpoint_embeds_model() {
        let settings = ProviderSettings::builder()
            .kind(ProviderKind::Gemini)
            .model("gemini-pro")
            .base_url("http://localhost:9000/")
            .build()
            .unwrap();
        assert_eq!(
            endpoint(&settings),
            "http://localhost:9000/v1beta2/models/gemini-pro:generateText"
        );
    }

    #[test]
    fn gemini_payload_shape() {
        let settings = ProviderSettings::with_defaults(ProviderKind::Gemini, Some("k".into()));
        let body = payload(&settings, "diwali sale").unwrap();
        let text = body["prompt"]["text"].as_str().unwrap();
        assert!(text.starts_with("You are a helpful assistant"));
        assert!(text.contains("under 40 words"));
        assert!(text.ends_with("for this prompt: diwali sale"));
        assert_eq!(body["maxOutputTokens"], 120);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn openai_payload_shape() {
        let settings = ProviderSettings::with_defaults(ProviderKind::OpenAi, Some("k".into()));
        let body = payload(&settings, "new year").unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 120);
        assert_eq!(body["messages"][0]["role"], "system");
        assert!(
            body["messages"][0]["content"]
                .as_str()
                .unwrap()
                .ends_with("{name} placeholder.")
        );
        assert_eq!(
            body["messages"][1]["content"],
            "Create a short customer message for: new year"
        );
    }
}

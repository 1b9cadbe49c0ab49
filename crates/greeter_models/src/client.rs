//! HTTP client shared by all providers.

use crate::{ProviderSettings, TextGenerator, extract_text, wire};
use async_trait::async_trait;
use greeter_core::ProviderKind;
use greeter_error::{ProviderError, ProviderErrorKind};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument};

/// Generator for any supported provider.
///
/// Construction fails with [`ProviderErrorKind::MissingApiKey`] before any
/// network traffic when the settings carry no API key.
#[derive(Clone)]
pub struct HttpTextGenerator {
    client: Client,
    settings: ProviderSettings,
    api_key: String,
}

impl std::fmt::Debug for HttpTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTextGenerator")
            .field("provider", self.settings.kind())
            .field("model", self.settings.model())
            .field("base_url", self.settings.base_url())
            .finish_non_exhaustive()
    }
}

impl HttpTextGenerator {
    /// Creates a generator that sends requests through `client`.
    #[instrument(skip_all, fields(provider = %settings.kind(), model = %settings.model()))]
    pub fn new(client: Client, settings: ProviderSettings) -> Result<Self, ProviderError> {
        let kind = *settings.kind();
        let api_key = settings.api_key().clone().ok_or_else(|| {
            ProviderError::new(
                kind.name(),
                ProviderErrorKind::MissingApiKey(wire::api_key_var(kind).to_string()),
            )
        })?;

        debug!(url = %wire::endpoint(&settings), "Created provider client");

        Ok(Self {
            client,
            settings,
            api_key,
        })
    }

    /// Returns the settings this generator was built from.
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    fn provider_name(&self) -> &'static str {
        self.settings.kind().name()
    }

    #[instrument(skip(self, prompt), fields(provider = self.provider_name(), model = %self.settings.model()))]
    async fn send(&self, prompt: &str) -> Result<String, ProviderError> {
        let provider = self.provider_name();
        let body = wire::payload(&self.settings, prompt)?;

        let request = self.client.post(wire::endpoint(&self.settings)).json(&body);
        let request = match self.settings.kind() {
            ProviderKind::Gemini => request.query(&[("key", self.api_key.as_str())]),
            ProviderKind::OpenAi => request.bearer_auth(&self.api_key),
        };

        debug!(provider, prompt_len = prompt.len(), "Sending request");

        // Gemini carries the key in the query string; keep the URL out of errors
        let response = request.send().await.map_err(|e| {
            let e = e.without_url();
            error!(provider, error = %e, "HTTP request failed");
            ProviderError::new(provider, ProviderErrorKind::Transport(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(provider, status = %status, error = %error_text, "API error");
            return Err(ProviderError::new(
                provider,
                ProviderErrorKind::HttpStatus {
                    status_code: status.as_u16(),
                    body: error_text,
                },
            ));
        }

        let json: Value = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!(provider, error = %e, "Failed to parse response");
            ProviderError::new(
                provider,
                ProviderErrorKind::ResponseParsing(format!("Failed to parse JSON: {}", e)),
            )
        })?;

        let text = extract_text(&json, wire::text_paths(*self.settings.kind()));
        debug!(provider, text_len = text.len(), "Received response");
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for HttpTextGenerator {
    fn kind(&self) -> ProviderKind {
        *self.settings.kind()
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.send(prompt).await
    }
}


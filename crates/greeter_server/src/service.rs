//! Generation pipeline: provider attempt with rule-based fallback.

use crate::ProvidersConfig;
use greeter_core::{GenerationRequest, GenerationResult, ProviderKind, ProviderPreference};
use greeter_error::ProviderError;
use greeter_models::{HttpTextGenerator, TextGenerator};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Stateless message generator shared by all requests.
#[derive(Debug, Clone)]
pub struct GreetingService {
    client: Client,
    providers: ProvidersConfig,
}

impl GreetingService {
    /// Creates a service with a fresh HTTP client.
    pub fn new(providers: ProvidersConfig) -> Self {
        Self::with_client(Client::new(), providers)
    }

    /// Creates a service that sends provider traffic through `client`.
    pub fn with_client(client: Client, providers: ProvidersConfig) -> Self {
        info!(
            gemini_configured = providers.gemini().is_configured(),
            openai_configured = providers.openai().is_configured(),
            default_provider = %providers.default_provider(),
            "Greeting service ready"
        );
        Self { client, providers }
    }

    /// Provider configuration in use.
    pub fn providers(&self) -> &ProvidersConfig {
        &self.providers
    }

    /// Maps the request's provider preference to a concrete provider.
    ///
    /// Returns `None` for unknown provider names.
    pub fn resolve_provider(&self, preference: &ProviderPreference) -> Option<ProviderKind> {
        match preference {
            ProviderPreference::Auto => Some(self.providers.resolve_default()),
            ProviderPreference::Named(kind) => Some(*kind),
            ProviderPreference::Unknown(_) => None,
        }
    }

    /// Builds the adapter for `kind`. Fails when its credential is absent.
    pub fn generator_for(&self, kind: ProviderKind) -> Result<HttpTextGenerator, ProviderError> {
        HttpTextGenerator::new(self.client.clone(), self.providers.settings(kind).clone())
    }

    /// Produces a message for an already validated request.
    ///
    /// Never fails: provider problems are logged and replaced by the
    /// rule-based template.
    #[instrument(skip_all, fields(use_llm = request.use_llm()))]
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        if request.use_llm() {
            match self.resolve_provider(request.provider()) {
                Some(kind) => {
                    match self.attempt_provider(kind, request.prompt()).await {
                        Ok(result) => return result,
                        Err(e) => warn!(
                            provider = %kind,
                            configuration = e.is_configuration(),
                            error = %e.kind,
                            "LLM generation failed, using rule-based fallback"
                        ),
                    }
                }
                None => warn!(
                    provider = ?request.provider(),
                    "Unknown provider requested, using rule-based fallback"
                ),
            }
        }

        let result = GenerationResult::from_fallback(request.prompt());
        debug!(source = ?result.source(), "Rule-based message selected");
        result
    }

    async fn attempt_provider(
        &self,
        kind: ProviderKind,
        prompt: &str,
    ) -> Result<GenerationResult, ProviderError> {
        let generator = self.generator_for(kind)?;
        let text = generator.generate(prompt).await?;
        debug!(provider = %kind, "Provider message accepted");
        Ok(GenerationResult::from_provider(kind, text))
    }
}

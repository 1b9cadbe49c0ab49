//! Per-provider connection settings.

use derive_getters::Getters;
use greeter_core::ProviderKind;

/// Credentials and endpoint for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ProviderSettings {
    /// Provider these settings belong to
    kind: ProviderKind,
    /// API key; `None` when the environment does not provide one
    #[builder(default)]
    api_key: Option<String>,
    /// Model identifier
    model: String,
    /// Scheme and host, without trailing path (e.g. "https://api.openai.com")
    base_url: String,
}

impl ProviderSettings {
    /// Creates a builder.
    pub fn builder() -> ProviderSettingsBuilder {
        ProviderSettingsBuilder::default()
    }

    /// Settings with the provider's public endpoint and default model.
    pub fn with_defaults(kind: ProviderKind, api_key: Option<String>) -> Self {
        Self {
            kind,
            api_key,
            model: crate::wire::default_model(kind).to_string(),
            base_url: crate::wire::default_base_url(kind).to_string(),
        }
    }

    /// Reads settings for `kind` from the process environment.
    ///
    /// Gemini: `GEMINI_API_KEY` (or `GOOGLE_API_KEY`), `GEMINI_MODEL`, `GEMINI_BASE_URL`.
    /// OpenAI: `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL`.
    /// Empty values are treated as unset.
    pub fn from_env(kind: ProviderKind) -> Self {
        let (key_vars, model_var, url_var): (&[&str], &str, &str) = match kind {
            ProviderKind::Gemini => (
                &["GEMINI_API_KEY", "GOOGLE_API_KEY"][..],
                "GEMINI_MODEL",
                "GEMINI_BASE_URL",
            ),
            ProviderKind::OpenAi => (&["OPENAI_API_KEY"][..], "OPENAI_MODEL", "OPENAI_BASE_URL"),
        };

        let api_key = key_vars.iter().find_map(|var| non_empty_env(var));
        let mut settings = Self::with_defaults(kind, api_key);
        if let Some(model) = non_empty_env(model_var) {
            settings.model = model;
        }
        if let Some(url) = non_empty_env(url_var) {
            settings.base_url = url;
        }
        settings
    }

    /// True when an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

//! Configuration for the HTTP server and its providers.

use derive_getters::Getters;
use greeter_core::ProviderKind;
use greeter_error::ConfigError;
use greeter_models::ProviderSettings;
use std::str::FromStr;

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0")
    #[builder(default = "\"0.0.0.0\".to_string()")]
    host: String,
    /// TCP port
    #[builder(default = "3000")]
    port: u16,
}

impl ServerConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GREETER_HOST` (default: "0.0.0.0")
    /// - `PORT` (default: 3000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None, |var| std::env::var(var).ok())
    }

    /// Builds config from explicit overrides, consulting `lookup` only for
    /// fields the overrides leave unset.
    ///
    /// An unparsable `PORT` is an error only when no port override is given.
    pub fn resolve(
        host: Option<String>,
        port: Option<u16>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ServerConfigBuilder::default();

        if let Some(host) = host.or_else(|| lookup("GREETER_HOST")) {
            builder.host(host);
        }

        let port = match port {
            Some(port) => Some(port),
            None => lookup("PORT")
                .map(|raw| {
                    raw.trim()
                        .parse::<u16>()
                        .map_err(|e| ConfigError::invalid_port("PORT", &raw, e))
                })
                .transpose()?,
        };
        if let Some(port) = port {
            builder.port(port);
        }

        builder
            .build()
            .map_err(|e| ConfigError::new(format!("Incomplete server config: {}", e)))
    }

    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for every provider plus the tie-break default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ProvidersConfig {
    /// Gemini settings
    gemini: ProviderSettings,
    /// OpenAI settings
    openai: ProviderSettings,
    /// Used when both or neither provider has a credential
    #[builder(default = "ProviderKind::Gemini")]
    default_provider: ProviderKind,
}

impl ProvidersConfig {
    /// Creates a builder.
    pub fn builder() -> ProvidersConfigBuilder {
        ProvidersConfigBuilder::default()
    }

    /// Create config from environment variables.
    ///
    /// Provider variables are documented on [`ProviderSettings::from_env`].
    /// `GREETER_DEFAULT_PROVIDER` selects the tie-break default (`gemini`).
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_provider = match std::env::var("GREETER_DEFAULT_PROVIDER") {
            Ok(raw) if !raw.trim().is_empty() => ProviderKind::from_str(raw.trim())
                .map_err(|_| ConfigError::unknown_provider("GREETER_DEFAULT_PROVIDER", &raw))?,
            _ => ProviderKind::Gemini,
        };

        Ok(Self {
            gemini: ProviderSettings::from_env(ProviderKind::Gemini),
            openai: ProviderSettings::from_env(ProviderKind::OpenAi),
            default_provider,
        })
    }

    /// Settings for one provider.
    pub fn settings(&self, kind: ProviderKind) -> &ProviderSettings {
        match kind {
            ProviderKind::Gemini => &self.gemini,
            ProviderKind::OpenAi => &self.openai,
        }
    }

    /// Provider used when the request names none.
    ///
    /// Exactly one configured provider wins; otherwise the fixed default.
    pub fn resolve_default(&self) -> ProviderKind {
        match (self.gemini.is_configured(), self.openai.is_configured()) {
            (true, false) => ProviderKind::Gemini,
            (false, true) => ProviderKind::OpenAi,
            _ => self.default_provider,
        }
    }
}

//! Errors from reading service configuration.

/// A configuration value was present but unusable.
///
/// Missing provider credentials are not reported here; those surface as
/// [`crate::ProviderErrorKind::MissingApiKey`] and trigger the fallback.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What was wrong
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// `var` held `value`, which does not parse as a TCP port.
    ///
    /// # Examples
    ///
    /// ```
    /// use greeter_error::ConfigError;
    ///
    /// let err = ConfigError::invalid_port("PORT", "eighty", "invalid digit");
    /// assert_eq!(err.message, "PORT 'eighty' is not a valid port: invalid digit");
    /// ```
    #[track_caller]
    pub fn invalid_port(var: &str, value: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(format!("{} '{}' is not a valid port: {}", var, value, reason))
    }

    /// `var` named a provider greeter does not support.
    #[track_caller]
    pub fn unknown_provider(var: &str, value: &str) -> Self {
        Self::new(format!("{} '{}' is not one of gemini, openai", var, value))
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid configuration: {} ({}:{})", self.message, self.file, self.line)
    }
}

impl std::error::Error for ConfigError {}

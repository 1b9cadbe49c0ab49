//! Text-generation provider errors.

/// Provider failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderErrorKind {
    /// Required credential is not configured (names the expected variable)
    MissingApiKey(String),
    /// Request could not be sent or the connection failed
    Transport(String),
    /// Provider answered with a non-success status
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        body: String,
    },
    /// Response body was not valid JSON
    ResponseParsing(String),
    /// Request payload could not be assembled
    Builder(String),
}

impl std::fmt::Display for ProviderErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderErrorKind::MissingApiKey(var) => write!(f, "{} not configured", var),
            ProviderErrorKind::Transport(msg) => write!(f, "Request failed: {}", msg),
            ProviderErrorKind::HttpStatus { status_code, body } => {
                write!(f, "API error: {} {}", status_code, body)
            }
            ProviderErrorKind::ResponseParsing(msg) => {
                write!(f, "Response parsing failed: {}", msg)
            }
            ProviderErrorKind::Builder(msg) => write!(f, "Builder error: {}", msg),
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use greeter_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(
///     "openai",
///     ProviderErrorKind::MissingApiKey("OPENAI_API_KEY".to_string()),
/// );
/// assert!(err.is_configuration());
/// assert!(format!("{}", err).contains("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// Provider that failed
    pub provider: &'static str,
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(provider: &'static str, kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            provider,
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the provider was never called because a credential is absent.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind, ProviderErrorKind::MissingApiKey(_))
    }

    /// HTTP status returned by the provider, if it got that far.
    pub fn status_code(&self) -> Option<u16> {
        match &self.kind {
            ProviderErrorKind::HttpStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Provider Error ({}): {} at line {} in {}",
            self.provider, self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_is_not_configuration() {
        let err = ProviderError::new(
            "gemini",
            ProviderErrorKind::HttpStatus {
                status_code: 500,
                body: "boom".to_string(),
            },
        );
        assert!(!err.is_configuration());
        assert_eq!(err.status_code(), Some(500));
        assert!(err.to_string().contains("API error: 500 boom"));
    }

    #[test]
    fn records_creation_site() {
        let err = ProviderError::new("openai", ProviderErrorKind::Transport("refused".into()));
        assert!(err.file.ends_with("provider.rs"));
        assert!(err.line > 0);
    }
}

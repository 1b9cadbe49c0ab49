//! Aggregate error for the workspace.

use crate::{ConfigError, HttpError, ProviderError, ValidationError};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum GreeterErrorKind {
    /// Bad request payload
    Validation(ValidationError),
    /// Configuration error
    Config(ConfigError),
    /// Provider call failed
    Provider(ProviderError),
    /// HTTP listener error
    Http(HttpError),
}

impl std::fmt::Display for GreeterErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GreeterErrorKind::Validation(e) => write!(f, "{}", e),
            GreeterErrorKind::Config(e) => write!(f, "{}", e),
            GreeterErrorKind::Provider(e) => write!(f, "{}", e),
            GreeterErrorKind::Http(e) => write!(f, "{}", e),
        }
    }
}

/// Greeter error with kind discrimination.
#[derive(Debug)]
pub struct GreeterError(Box<GreeterErrorKind>);

impl GreeterError {
    /// Create a new error from a kind.
    pub fn new(kind: GreeterErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GreeterErrorKind {
        &self.0
    }
}

impl std::fmt::Display for GreeterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Greeter Error: {}", self.0)
    }
}

impl std::error::Error for GreeterError {}

impl<T> From<T> for GreeterError
where
    T: Into<GreeterErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for greeter operations.
pub type GreeterResult<T> = std::result::Result<T, GreeterError>;

//! Error types for the greeter service.
//!
//! Every error records the source location where it was created. Only
//! [`ValidationError`] is ever shown to HTTP callers; provider and
//! configuration failures are absorbed by the rule-based fallback.

mod config;
mod error;
mod http;
mod provider;
mod validation;

pub use config::ConfigError;
pub use error::{GreeterError, GreeterErrorKind, GreeterResult};
pub use http::HttpError;
pub use provider::{ProviderError, ProviderErrorKind};
pub use validation::ValidationError;

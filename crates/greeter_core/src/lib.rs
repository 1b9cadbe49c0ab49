//! Core data types for the greeter message service.
//!
//! This crate holds the request-scoped data model and the deterministic
//! keyword classifier used whenever no provider produces a message.

mod observability;
mod occasion;
mod provider;
mod request;

pub use observability::{LogFormat, init_tracing};
pub use occasion::{Occasion, classify, generate_rule_message};
pub use provider::ProviderKind;
pub use request::{GenerationRequest, GenerationResult, MessageSource, ProviderPreference};

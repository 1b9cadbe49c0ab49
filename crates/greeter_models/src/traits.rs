//! Provider capability trait.

use async_trait::async_trait;
use greeter_core::ProviderKind;
use greeter_error::ProviderError;

/// Anything that can turn a prompt into a short message.
///
/// Implementations issue at most one outbound request per call and never retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Which provider this generator talks to.
    fn kind(&self) -> ProviderKind;

    /// Generates trimmed text for `prompt`.
    ///
    /// An empty string is a successful result when the provider response
    /// carried no recognisable text field.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

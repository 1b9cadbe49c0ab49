//! `generate` command handler.

use greeter_core::{GenerationRequest, ProviderPreference};
use greeter_error::GreeterResult;
use greeter_server::{GreetingService, ProvidersConfig};
use serde_json::json;

/// Handle the `generate` command
pub async fn handle_generate_command(
    prompt: String,
    llm: bool,
    provider: Option<String>,
) -> GreeterResult<()> {
    let body = json!({ "prompt": prompt, "useLLM": llm, "provider": provider });
    let request = GenerationRequest::from_json(&body)?;

    if let ProviderPreference::Unknown(name) = request.provider() {
        tracing::warn!(provider = %name, "Unknown provider, rule-based message will be used");
    }

    let service = GreetingService::new(ProvidersConfig::from_env()?);
    let result = service.generate(&request).await;
    println!("{}", result.message());

    Ok(())
}

//! `serve` command handler.

use greeter_error::GreeterResult;
use greeter_server::{GreetingService, ProvidersConfig, ServerConfig};
use std::sync::Arc;

/// Handle the `serve` command
///
/// `--host`/`--port` take precedence; the environment fills in the rest.
pub async fn handle_serve_command(host: Option<String>, port: Option<u16>) -> GreeterResult<()> {
    let config = ServerConfig::resolve(host, port, |var| std::env::var(var).ok())?;

    tracing::info!(address = %config.bind_address(), "Starting message generator");

    let service = Arc::new(GreetingService::new(ProvidersConfig::from_env()?));
    greeter_server::serve(&config, service).await?;

    Ok(())
}

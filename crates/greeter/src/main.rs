//! Greeter - turns a short prompt into a greeting message.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use greeter_core::{LogFormat, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; real deployments use the process environment
    let dotenv = dotenvy::dotenv();

    init_tracing(LogFormat::from_env()).map_err(anyhow::Error::msg)?;
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { host, port } => cli::handle_serve_command(host, port).await?,
        Commands::Generate {
            prompt,
            llm,
            provider,
        } => cli::handle_generate_command(prompt, llm, provider).await?,
    }

    Ok(())
}

//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Greeting message generator.
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(about = "Generate short greeting messages from a prompt")]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Interface to bind (overrides GREETER_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate one message and print it
    Generate {
        /// Prompt describing the occasion
        prompt: String,

        /// Ask a text-generation provider first
        #[arg(long)]
        llm: bool,

        /// Provider name (gemini or openai)
        #[arg(long)]
        provider: Option<String>,
    },
}

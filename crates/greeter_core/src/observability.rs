//! Tracing subscriber initialization.

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Reads `GREETER_LOG_FORMAT`, defaulting to [`LogFormat::Pretty`].
    pub fn from_env() -> Self {
        std::env::var("GREETER_LOG_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and falls back to `info`. Calling this twice
/// is harmless; the second attempt is reported as an error string.
pub fn init_tracing(format: LogFormat) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    }
    .map_err(|e| format!("Failed to install tracing subscriber: {}", e))?;

    info!(format = %format, "Tracing initialized");
    debug!("Debug logging enabled");
    Ok(())
}

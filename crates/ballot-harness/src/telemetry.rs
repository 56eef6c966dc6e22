//! Logging initialization.
//!
//! Sets up structured logging with tracing and optional JSON output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging.
///
/// `log_level` accepts a plain level (`info`) or a full filter directive
/// (`ballot_core=debug,info`).
pub fn init_telemetry(log_level: &str, json_format: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level)?;

    let result = if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

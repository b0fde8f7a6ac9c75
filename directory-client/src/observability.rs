//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::{config::LoggingConfig, error::Result};

/// Initialize tracing to stderr
///
/// `RUST_LOG` takes precedence over the configured level. Calling this
/// twice is harmless: the second subscriber is rejected and ignored.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(level = %config.level, format = %config.format, "Tracing initialized");
    }

    Ok(())
}

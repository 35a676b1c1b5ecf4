//! Logging setup
//!
//! Console logging through `tracing-subscriber`. `RUST_LOG` takes precedence
//! over the level passed in.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "skin_client=trace")
/// * `json_format` - JSON lines instead of human-readable output
///
/// Fails if a global subscriber is already installed.
///
/// # Examples
/// ```no_run
/// skin_client::logger::init_logger("debug", false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true);
        subscriber.with(console_layer).try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        subscriber.with(console_layer).try_init()?;
    }

    Ok(())
}

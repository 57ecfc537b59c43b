// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Combines console and JSON layers with filtering for complete logging setup

use anyhow::{Context, Result};

use crate::config::LoggingConfig;
use crate::layers::{create_env_filter, create_output_layers};

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_subscriber(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{prelude::*, util::SubscriberInitExt};

    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let layers = create_output_layers(&config.output);

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    tracing::debug!(
        log_level = %config.level.0,
        console_output = config.output.console,
        json_output = config.output.json,
        module_overrides = config.module_levels.len(),
        "Toneprops logging initialized"
    );

    Ok(())
}

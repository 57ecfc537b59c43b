// ABOUTME: toneprops binary: source color and custom colors in, design tokens out on stdout
// ABOUTME: Logs go to stderr so the token payload can be piped

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::Write;
use toneprops_core::{TokenError, properties_from_theme};
use toneprops_engine::{OklchEngine, theme_from_source_color};
use toneprops_logging::{config_for_verbosity, debug, info, init_logging_with_config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let rendered = run(&cli)?;
    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write tokens to stdout")
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let config = config_for_verbosity(verbosity)
        .context("Failed to create logging config from environment")?;
    init_logging_with_config(config).context("Failed to initialize toneprops logging")?;
    debug!(verbosity, "Logging initialized");
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let overrides = cli.token_overrides()?;
    let engine = OklchEngine::new();
    let theme = theme_from_source_color(&engine, cli.source, &cli.custom_colors);

    let properties = properties_from_theme(&theme, &engine, &overrides).map_err(|err| {
        let context = failure_context(&err);
        anyhow::Error::new(err).context(context)
    })?;
    info!(
        source = %cli.source,
        tokens = properties.len(),
        "Derived design tokens"
    );

    output::render(&properties, cli.format)
}

fn failure_context(err: &TokenError) -> &'static str {
    if err.is_config_error() {
        "Invalid token configuration"
    } else {
        "Theme cannot be turned into tokens"
    }
}

// ABOUTME: Public API for toneprops logging infrastructure built on tracing
// ABOUTME: Provides centralized configuration and initialization for structured logging

pub mod config;
pub mod layers;
pub mod performance;
pub mod subscriber;

// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

// Re-export configuration types
pub use config::{LogLevel, LoggingConfig, OutputConfig};

// Re-export initialization functions
pub use subscriber::init_subscriber;

// Re-export performance monitoring utilities
pub use performance::PerfTimer;

use anyhow::Result;

/// Initialize logging with default configuration.
///
/// This is a convenience function that creates a default LoggingConfig
/// and initializes the tracing subscriber.
pub fn init_logging() -> Result<()> {
    let config = LoggingConfig::default();
    init_subscriber(config)
}

/// Initialize logging with custom configuration.
pub fn init_logging_with_config(config: LoggingConfig) -> Result<()> {
    init_subscriber(config)
}

/// Build a configuration from the environment, then raise or lower the global
/// level by command-line verbosity (0 = warn, 1 = info, 2 = debug, 3+ = trace).
pub fn config_for_verbosity(verbosity: u8) -> Result<LoggingConfig> {
    let mut config = LoggingConfig::from_env()?;
    if verbosity > 0 || !config::level_set_in_env() {
        config.level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
        .into();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let config = config_for_verbosity(2).unwrap();
        assert_eq!(config.level.0, Level::DEBUG);

        let config = config_for_verbosity(9).unwrap();
        assert_eq!(config.level.0, Level::TRACE);
    }
}

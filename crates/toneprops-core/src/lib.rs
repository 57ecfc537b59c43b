// ABOUTME: Design-token derivation pipeline from a color theme to CSS custom properties
// ABOUTME: Naming policy, RGB codec, configuration, derivers, and the orchestrating entry points

pub mod config;
pub mod derive;
pub mod error;
pub mod naming;
pub mod orchestrator;
pub mod rgb;

#[cfg(test)]
mod test_support;

use std::collections::BTreeMap;

/// Flat token map: `--prefix-name` to a color string.
pub type Properties = BTreeMap<String, String>;

pub use config::{
    PrefixConfig, PrefixOverrides, RgbConfig, RgbOverrides, TintOverrides, TintTable,
    TokenConfig, TokenConfigOverrides,
};
pub use error::{Result, TokenError};
pub use naming::{camelize, capitalize, compose_token, contrast_token, humanize, tokenize};
pub use orchestrator::{
    DEFAULT_TONES, SURFACE_CONTAINER_TONES, properties_from_theme,
    properties_from_theme_with_config,
};
pub use rgb::{RgbSeparator, hex_alpha_from_argb, rgb_from_hex, rgb_from_hex_lenient};

// ABOUTME: Command-line arguments for the toneprops binary
// ABOUTME: Flags fold into token config overrides on top of any inline JSON

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use toneprops_core::TokenConfigOverrides;
use toneprops_types::{Argb, CustomColor};

#[derive(Debug, Parser)]
#[command(
    name = "toneprops",
    about = "Derives CSS custom properties (design tokens) from a source color.",
    version
)]
pub struct Cli {
    /// Source color as #rrggbb.
    #[arg(value_name = "SOURCE_HEX")]
    pub source: Argb,

    /// Extra named color; append `:blend` to harmonize it toward the source.
    #[arg(long = "custom", value_name = "NAME=HEX[:blend]", value_parser = parse_custom_color)]
    pub custom_colors: Vec<CustomColor>,

    /// Use the dark scheme for unsuffixed tokens.
    #[arg(long)]
    pub dark: bool,

    /// Skip the -light and -dark token variants.
    #[arg(long)]
    pub no_brightness_suffix: bool,

    /// Partial token configuration as JSON, e.g. '{"prefix":{"color":"app-"}}'.
    #[arg(long, value_name = "JSON")]
    pub overrides: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Increase logging verbosity (repeat for more).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Css,
}

impl Cli {
    /// Inline JSON overrides with the boolean flags applied last.
    pub fn token_overrides(&self) -> Result<TokenConfigOverrides> {
        let mut overrides: TokenConfigOverrides = match &self.overrides {
            Some(json) => serde_json::from_str(json).context("Invalid --overrides JSON")?,
            None => TokenConfigOverrides::default(),
        };
        if self.dark {
            overrides.dark = Some(true);
        }
        if self.no_brightness_suffix {
            overrides.brightness_suffix = Some(false);
        }
        Ok(overrides)
    }
}

fn parse_custom_color(arg: &str) -> std::result::Result<CustomColor, String> {
    let (name, rest) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=HEX[:blend], got '{arg}'"))?;
    if name.trim().is_empty() {
        return Err(format!("custom color '{arg}' has no name"));
    }

    let (hex, blend) = match rest.split_once(':') {
        Some((hex, "blend")) => (hex, true),
        Some((_, flag)) => return Err(format!("unknown custom color flag '{flag}'")),
        None => (rest, false),
    };
    let value = Argb::from_hex(hex).map_err(|err| err.to_string())?;
    Ok(CustomColor::new(name, value, blend))
}

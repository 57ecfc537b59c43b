// ABOUTME: Token derivation configuration and partial overrides
// ABOUTME: Overrides merge per field at every nesting level onto resolved defaults

use crate::error::{Result, TokenError};
use crate::orchestrator::{
    DEFAULT_COLOR_PREFIX, DEFAULT_CUSTOM_COLOR_PREFIX, DEFAULT_PALETTE_PREFIX, DEFAULT_RGB_SUFFIX,
    DEFAULT_TINT_RATIOS, DEFAULT_TINT_ROLES, DEFAULT_TONES,
};
use crate::rgb::RgbSeparator;
use serde::{Deserialize, Serialize};
use toneprops_types::MAX_TONE;

/// Prefixes placed between `--` and each token's base name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixConfig {
    pub palette: String,
    pub color: String,
    pub custom_color: String,
}

impl Default for PrefixConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE_PREFIX.to_string(),
            color: DEFAULT_COLOR_PREFIX.to_string(),
            custom_color: DEFAULT_CUSTOM_COLOR_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbConfig {
    /// Emit a decimal-channel sibling for every color token
    pub include: bool,
    pub separator: RgbSeparator,
    pub suffix: String,
    /// Malformed hex becomes `0,0,0` instead of an error
    pub lenient: bool,
}

impl Default for RgbConfig {
    fn default() -> Self {
        Self {
            include: true,
            separator: RgbSeparator::Comma,
            suffix: DEFAULT_RGB_SUFFIX.to_string(),
            lenient: false,
        }
    }
}

/// Role names paired index-wise with surface-to-primary blend ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TintTable {
    pub roles: Vec<String>,
    pub ratios: Vec<f64>,
}

impl Default for TintTable {
    fn default() -> Self {
        Self {
            roles: DEFAULT_TINT_ROLES.iter().map(|role| role.to_string()).collect(),
            ratios: DEFAULT_TINT_RATIOS.to_vec(),
        }
    }
}

impl TintTable {
    pub fn validate(&self) -> Result<()> {
        if self.roles.len() != self.ratios.len() {
            return Err(TokenError::TintTableMismatch {
                roles: self.roles.len(),
                ratios: self.ratios.len(),
            });
        }
        if let Some(&ratio) = self.ratios.iter().find(|r| !(0.0..=1.0).contains(*r)) {
            return Err(TokenError::TintRatioOutOfRange { ratio });
        }
        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.roles
            .iter()
            .map(String::as_str)
            .zip(self.ratios.iter().copied())
    }
}

/// Fully resolved configuration for one derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    pub tones: Vec<u8>,
    /// Unsuffixed scheme tokens come from the dark scheme
    pub dark: bool,
    /// Also emit `-light` and `-dark` variants of every scheme token
    pub brightness_suffix: bool,
    pub prefix: PrefixConfig,
    pub rgb: RgbConfig,
    pub tint: TintTable,
    /// Reject custom colors whose names collide instead of letting the last one win
    pub strict_custom_colors: bool,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            tones: DEFAULT_TONES.to_vec(),
            dark: false,
            brightness_suffix: true,
            prefix: PrefixConfig::default(),
            rgb: RgbConfig::default(),
            tint: TintTable::default(),
            strict_custom_colors: false,
        }
    }
}

impl TokenConfig {
    /// Check every caller-controlled value before any token is derived.
    pub fn validate(&self) -> Result<()> {
        if let Some(&tone) = self.tones.iter().find(|&&tone| tone > MAX_TONE) {
            return Err(TokenError::tone_out_of_range(tone));
        }
        self.tint.validate()
    }

    /// A new config with every `Some` field of `overrides` applied.
    pub fn merged(&self, overrides: &TokenConfigOverrides) -> TokenConfig {
        TokenConfig {
            tones: overrides.tones.clone().unwrap_or_else(|| self.tones.clone()),
            dark: overrides.dark.unwrap_or(self.dark),
            brightness_suffix: overrides.brightness_suffix.unwrap_or(self.brightness_suffix),
            prefix: match &overrides.prefix {
                Some(prefix) => self.prefix.merged(prefix),
                None => self.prefix.clone(),
            },
            rgb: match &overrides.rgb {
                Some(rgb) => self.rgb.merged(rgb),
                None => self.rgb.clone(),
            },
            tint: match &overrides.tint {
                Some(tint) => self.tint.merged(tint),
                None => self.tint.clone(),
            },
            strict_custom_colors: overrides
                .strict_custom_colors
                .unwrap_or(self.strict_custom_colors),
        }
    }
}

impl PrefixConfig {
    fn merged(&self, overrides: &PrefixOverrides) -> PrefixConfig {
        PrefixConfig {
            palette: overrides.palette.clone().unwrap_or_else(|| self.palette.clone()),
            color: overrides.color.clone().unwrap_or_else(|| self.color.clone()),
            custom_color: overrides
                .custom_color
                .clone()
                .unwrap_or_else(|| self.custom_color.clone()),
        }
    }
}

impl RgbConfig {
    fn merged(&self, overrides: &RgbOverrides) -> RgbConfig {
        RgbConfig {
            include: overrides.include.unwrap_or(self.include),
            separator: overrides.separator.unwrap_or(self.separator),
            suffix: overrides.suffix.clone().unwrap_or_else(|| self.suffix.clone()),
            lenient: overrides.lenient.unwrap_or(self.lenient),
        }
    }
}

impl TintTable {
    fn merged(&self, overrides: &TintOverrides) -> TintTable {
        TintTable {
            roles: overrides.roles.clone().unwrap_or_else(|| self.roles.clone()),
            ratios: overrides.ratios.clone().unwrap_or_else(|| self.ratios.clone()),
        }
    }
}

/// Caller-supplied partial configuration; absent fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TokenConfigOverrides {
    pub tones: Option<Vec<u8>>,
    pub dark: Option<bool>,
    pub brightness_suffix: Option<bool>,
    pub prefix: Option<PrefixOverrides>,
    pub rgb: Option<RgbOverrides>,
    pub tint: Option<TintOverrides>,
    pub strict_custom_colors: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PrefixOverrides {
    pub palette: Option<String>,
    pub color: Option<String>,
    pub custom_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RgbOverrides {
    pub include: Option<bool>,
    pub separator: Option<RgbSeparator>,
    pub suffix: Option<String>,
    pub lenient: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TintOverrides {
    pub roles: Option<Vec<String>>,
    pub ratios: Option<Vec<f64>>,
}

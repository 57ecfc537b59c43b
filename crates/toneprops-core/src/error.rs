// ABOUTME: Error types for token derivation
// ABOUTME: Separates configuration mistakes from structurally malformed themes

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("tone {tone} is outside the palette range 0..=100")]
    ToneOutOfRange { tone: u32 },

    #[error("surface tint table has {roles} role names but {ratios} ratios")]
    TintTableMismatch { roles: usize, ratios: usize },

    #[error("surface tint ratio {ratio} is outside 0..=1")]
    TintRatioOutOfRange { ratio: f64 },

    #[error("alpha {alpha} is outside 0..=1")]
    AlphaOutOfRange { alpha: f64 },

    #[error("'{input}' is not a 6- or 8-digit hex color")]
    MalformedHex { input: String },

    #[error("malformed theme: {reason}")]
    MalformedTheme { reason: String },

    #[error("custom color role '{role}' has no 'color' placeholder to substitute")]
    MissingColorPlaceholder { role: String },

    #[error("custom color name '{name}' is used by more than one group")]
    DuplicateCustomColor { name: String },
}

impl TokenError {
    pub fn tone_out_of_range(tone: impl Into<u32>) -> Self {
        Self::ToneOutOfRange { tone: tone.into() }
    }

    pub fn malformed_hex<S: Into<String>>(input: S) -> Self {
        Self::MalformedHex {
            input: input.into(),
        }
    }

    pub fn malformed_theme<S: Into<String>>(reason: S) -> Self {
        Self::MalformedTheme {
            reason: reason.into(),
        }
    }

    pub fn duplicate_custom_color<S: Into<String>>(name: S) -> Self {
        Self::DuplicateCustomColor { name: name.into() }
    }

    /// Caller supplied an unusable configuration
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ToneOutOfRange { .. }
                | Self::TintTableMismatch { .. }
                | Self::TintRatioOutOfRange { .. }
                | Self::AlphaOutOfRange { .. }
        )
    }

    /// The theme itself is structurally unusable
    pub fn is_theme_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedTheme { .. }
                | Self::MalformedHex { .. }
                | Self::MissingColorPlaceholder { .. }
                | Self::DuplicateCustomColor { .. }
        )
    }
}

// ABOUTME: Hex to decimal-channel conversion for RGB token variants
// ABOUTME: Strict parsing by default, with an opt-in zero-fallback compatibility mode

use crate::error::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use toneprops_logging::warn;
use toneprops_types::Argb;

/// Joiner between decimal channels.
///
/// `Space` suits the `rgb(r g b / a)` color-function syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RgbSeparator {
    #[default]
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = " ")]
    Space,
}

impl RgbSeparator {
    pub const fn as_str(self) -> &'static str {
        match self {
            RgbSeparator::Comma => ",",
            RgbSeparator::Space => " ",
        }
    }
}

impl fmt::Display for RgbSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_channels(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn join_channels(channels: [u8; 3], separator: RgbSeparator) -> String {
    let [r, g, b] = channels;
    let sep = separator.as_str();
    format!("{r}{sep}{g}{sep}{b}")
}

/// Decimal channels of `#rrggbb` (or `#rrggbbaa`, alpha ignored).
pub fn rgb_from_hex(hex: &str, separator: RgbSeparator) -> Result<String> {
    parse_channels(hex)
        .map(|channels| join_channels(channels, separator))
        .ok_or_else(|| TokenError::malformed_hex(hex))
}

/// Like [`rgb_from_hex`] but malformed input yields zero channels.
pub fn rgb_from_hex_lenient(hex: &str, separator: RgbSeparator) -> String {
    rgb_from_hex(hex, separator).unwrap_or_else(|err| {
        warn!(error = %err, "Falling back to zero channels");
        join_channels([0, 0, 0], separator)
    })
}

/// `#rrggbbaa` where `aa` is `round(alpha * 255)`.
pub fn hex_alpha_from_argb(color: Argb, alpha: f64) -> Result<String> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(TokenError::AlphaOutOfRange { alpha });
    }
    let byte = (alpha * 255.0).round() as u8;
    Ok(format!("{}{byte:02x}", color.to_hex()))
}

// ABOUTME: 24-bit opaque color value shared by every layer
// ABOUTME: Handles hex formatting and parsing with typed errors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest tone a tonal palette can be queried at.
pub const MAX_TONE: u8 = 100;

/// Errors produced when parsing a color from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {len} in '{input}'")]
    InvalidLength { input: String, len: usize },

    #[error("invalid hex digit in '{input}'")]
    InvalidDigit { input: String },
}

/// Opaque RGB color packed as `0xRRGGBB`.
///
/// The alpha channel is implicit (255). Values coming from an ARGB source
/// keep only their low 24 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb(u32);

impl Argb {
    pub const BLACK: Argb = Argb(0x000000);
    pub const WHITE: Argb = Argb(0xffffff);

    /// Build from a packed integer, discarding any alpha byte.
    pub const fn from_u32(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength {
                input: input.to_string(),
                len: digits.len(),
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit {
                input: input.to_string(),
            });
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| ColorParseError::InvalidDigit {
                input: input.to_string(),
            })
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Argb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl TryFrom<String> for Argb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let color = Argb::from_rgb(0x40, 0xa6, 0x73);
        assert_eq!(color.value(), 0x40a673);
        assert_eq!(color.channels(), [64, 166, 115]);
    }

    #[test]
    fn test_alpha_byte_is_dropped() {
        assert_eq!(Argb::from_u32(0xff40a673), Argb::from_u32(0x40a673));
    }

    #[test]
    fn test_hex_formatting_is_zero_padded() {
        assert_eq!(Argb::from_u32(0x0000ff).to_hex(), "#0000ff");
        assert_eq!(Argb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Argb::from_hex("#40A673").unwrap(), Argb::from_u32(0x40a673));
        assert_eq!("15466e".parse::<Argb>().unwrap(), Argb::from_u32(0x15466e));
        assert!(matches!(
            Argb::from_hex("#fff"),
            Err(ColorParseError::InvalidLength { len: 3, .. })
        ));
        assert!(matches!(
            Argb::from_hex("#zz0000"),
            Err(ColorParseError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Argb::from_u32(0x15466e)).unwrap();
        assert_eq!(json, "\"#15466e\"");
        let back: Argb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Argb::from_u32(0x15466e));
        assert!(serde_json::from_str::<Argb>("\"nope\"").is_err());
    }
}

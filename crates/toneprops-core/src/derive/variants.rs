// ABOUTME: Decimal-channel siblings for hex color tokens
// ABOUTME: Each key gains the configured suffix and each value becomes "r,g,b"

use crate::Properties;
use crate::error::Result;
use crate::rgb::{RgbSeparator, rgb_from_hex, rgb_from_hex_lenient};

pub fn rgb_properties(
    properties: &Properties,
    suffix: &str,
    separator: RgbSeparator,
    lenient: bool,
) -> Result<Properties> {
    properties
        .iter()
        .map(|(key, hex)| {
            let channels = if lenient {
                rgb_from_hex_lenient(hex, separator)
            } else {
                rgb_from_hex(hex, separator)?
            };
            Ok((format!("{key}{suffix}"), channels))
        })
        .collect()
}

// ABOUTME: Tokens for caller-supplied custom colors: a palette and light/dark roles per group
// ABOUTME: Role keys substitute the tokenized color name for the generic "color" placeholder

use super::check_tones;
use crate::Properties;
use crate::error::{Result, TokenError};
use crate::naming::{compose_token, hyphenate, tokenize};
use toneprops_logging::trace;
use toneprops_types::{Argb, ColorEngine, CustomColorGroup, RoleMap};

const COLOR_PLACEHOLDER: &str = "color";

/// Token base for a custom role, e.g. `onColorContainer` + `brand` = `on-brand-container`.
pub fn custom_role_token(role: &str, name: &str) -> Result<String> {
    let role = hyphenate(role);
    if !role.contains(COLOR_PLACEHOLDER) {
        return Err(TokenError::MissingColorPlaceholder { role });
    }
    Ok(role.replacen(COLOR_PLACEHOLDER, &tokenize(name), 1))
}

/// Palette tokens named after each custom color, e.g. `--md-ref-palette-brand40`.
///
/// Blended colors are harmonized toward `source` before the palette is built.
/// Groups whose names tokenize identically overwrite earlier ones.
pub fn derive_custom_palette_properties(
    groups: &[CustomColorGroup],
    engine: &dyn ColorEngine,
    source: Argb,
    tones: &[u8],
    prefix: &str,
) -> Result<Properties> {
    check_tones(tones)?;

    let mut properties = Properties::new();
    for group in groups {
        let color = &group.color;
        let seed = if color.blend {
            let harmonized = engine.harmonize(color.value, source);
            trace!(name = %color.name, from = %color.value, to = %harmonized, "Harmonized custom color");
            harmonized
        } else {
            color.value
        };

        let palette = engine.palette_from(seed);
        let base = tokenize(&color.name);
        for &tone in tones {
            properties.insert(
                compose_token(prefix, &base, &tone.to_string()),
                palette.tone(tone).to_hex(),
            );
        }
    }
    Ok(properties)
}

/// Role tokens of one group for the requested brightness.
pub fn derive_custom_scheme_properties(
    group: &CustomColorGroup,
    prefix: &str,
    suffix: &str,
    dark: bool,
) -> Result<Properties> {
    group
        .for_brightness(dark)
        .roles()
        .into_iter()
        .map(|(role, color)| {
            let base = custom_role_token(role, &group.color.name)?;
            Ok((compose_token(prefix, &base, suffix), color.to_hex()))
        })
        .collect()
}

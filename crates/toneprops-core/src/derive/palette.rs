// ABOUTME: Reference palette tokens: every named palette at every configured tone
// ABOUTME: Raw seed colors are lifted into palettes through the color engine

use super::check_tones;
use crate::Properties;
use crate::error::Result;
use crate::naming::{compose_token, tokenize};
use std::sync::Arc;
use toneprops_types::{ColorEngine, PaletteSource, Theme, TonalPalette};

pub fn resolve_palette(source: &PaletteSource, engine: &dyn ColorEngine) -> Arc<dyn TonalPalette> {
    match source {
        PaletteSource::Tonal(palette) => Arc::clone(palette),
        PaletteSource::Seed(seed) => engine.palette_from(*seed),
    }
}

/// `--{prefix}{palette}{tone}` for each palette and tone, e.g. `--md-ref-palette-primary40`.
pub fn derive_palette_properties(
    theme: &Theme,
    engine: &dyn ColorEngine,
    tones: &[u8],
    prefix: &str,
) -> Result<Properties> {
    check_tones(tones)?;

    let mut properties = Properties::new();
    for named in &theme.palettes {
        let palette = resolve_palette(&named.source, engine);
        let base = tokenize(&named.name);
        for &tone in tones {
            properties.insert(
                compose_token(prefix, &base, &tone.to_string()),
                palette.tone(tone).to_hex(),
            );
        }
    }
    Ok(properties)
}

// ABOUTME: Surface container roles at fixed tones and elevation tints blended toward a key color
// ABOUTME: Tables arrive as parameters; the orchestrator owns the constants

use crate::Properties;
use crate::config::TintTable;
use crate::error::Result;
use crate::naming::{compose_token, tokenize};
use crate::rgb::hex_alpha_from_argb;
use toneprops_types::{Argb, ColorEngine, Scheme};

/// A surface container role and the surface-palette tone it takes per brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceContainerTone {
    pub role: &'static str,
    pub light: u8,
    pub dark: u8,
}

impl SurfaceContainerTone {
    pub const fn new(role: &'static str, light: u8, dark: u8) -> Self {
        Self { role, light, dark }
    }

    pub const fn tone(&self, dark: bool) -> u8 {
        if dark { self.dark } else { self.light }
    }
}

/// One token per table row, read from the palette seeded by `scheme.surface`.
pub fn derive_surface_container_properties(
    scheme: &Scheme,
    engine: &dyn ColorEngine,
    table: &[SurfaceContainerTone],
    dark: bool,
    prefix: &str,
    suffix: &str,
) -> Result<Properties> {
    let palette = engine.palette_from(scheme.surface);
    let tones: Vec<u8> = table.iter().map(|row| row.tone(dark)).collect();
    super::check_tones(&tones)?;

    Ok(table
        .iter()
        .map(|row| {
            (
                compose_token(prefix, &tokenize(row.role), suffix),
                palette.tone(row.tone(dark)).to_hex(),
            )
        })
        .collect())
}

/// Elevation tokens for each `(role, ratio)` of `table`.
///
/// `--{prefix}{role}{suffix}` is `surface` blended toward `key` by the ratio.
/// `--{prefix}{role}-overlay{suffix}` is `source` with the ratio as its alpha.
pub fn derive_surface_tint_properties(
    surface: Argb,
    key: Argb,
    source: Argb,
    engine: &dyn ColorEngine,
    table: &TintTable,
    prefix: &str,
    suffix: &str,
) -> Result<Properties> {
    table.validate()?;

    let mut properties = Properties::new();
    for (role, ratio) in table.entries() {
        let base = tokenize(role);
        properties.insert(
            compose_token(prefix, &base, suffix),
            engine.blend(surface, key, ratio).to_hex(),
        );
        properties.insert(
            compose_token(prefix, &format!("{base}-overlay"), suffix),
            hex_alpha_from_argb(source, ratio)?,
        );
    }
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use crate::orchestrator::SURFACE_CONTAINER_TONES;
    use crate::test_support::{FakeEngine, SOURCE, dark_scheme, light_scheme};

    #[test]
    fn test_container_tones_follow_table() {
        let light = derive_surface_container_properties(
            &light_scheme(),
            &FakeEngine,
            &SURFACE_CONTAINER_TONES,
            false,
            "md-sys-color-",
            "",
        )
        .unwrap();
        assert_eq!(light.len(), 7);
        // Fake palette puts the tone in the blue channel: 87 = 0x57
        assert_eq!(light["--md-sys-color-surface-dim"], "#f0f057");
        assert_eq!(light["--md-sys-color-surface-container-lowest"], "#f0f064");

        let dark = derive_surface_container_properties(
            &dark_scheme(),
            &FakeEngine,
            &SURFACE_CONTAINER_TONES,
            true,
            "md-sys-color-",
            "-dark",
        )
        .unwrap();
        assert_eq!(dark.len(), 7);
        assert_eq!(dark["--md-sys-color-surface-dim-dark"], "#101006");
        assert_eq!(dark["--md-sys-color-surface-container-highest-dark"], "#101016");
    }

    #[test]
    fn test_tint_blends_surface_toward_key() {
        let table = TintTable {
            roles: vec!["surface-level0".into(), "surface-level1".into()],
            ratios: vec![0.0, 0.5],
        };
        let properties = derive_surface_tint_properties(
            Argb::from_u32(0x000000),
            Argb::from_u32(0x204060),
            SOURCE,
            &FakeEngine,
            &table,
            "c-",
            "",
        )
        .unwrap();

        assert_eq!(properties.len(), 4);
        assert_eq!(properties["--c-surface-level0"], "#000000");
        assert_eq!(properties["--c-surface-level1"], "#102030");
        assert_eq!(properties["--c-surface-level0-overlay"], "#40a67300");
        assert_eq!(properties["--c-surface-level1-overlay"], "#40a67380");
    }

    #[test]
    fn test_tint_table_mismatch_is_rejected() {
        let table = TintTable {
            roles: vec!["a".into(), "b".into(), "c".into()],
            ratios: vec![0.05, 0.08],
        };
        let result = derive_surface_tint_properties(
            Argb::WHITE,
            Argb::BLACK,
            SOURCE,
            &FakeEngine,
            &table,
            "",
            "",
        );
        assert_eq!(result, Err(TokenError::TintTableMismatch { roles: 3, ratios: 2 }));
    }
}

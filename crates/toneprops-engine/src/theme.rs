// ABOUTME: Assembles a complete Theme from one source color and optional custom colors
// ABOUTME: Key palettes plus Material-style light/dark tone assignments for every role

use crate::engine::OklchEngine;
use crate::oklab::{argb_to_oklch, normalize_hue};
use crate::palette::OklchPalette;
use std::f64::consts::PI;
use std::sync::Arc;
use toneprops_logging::debug;
use toneprops_types::{
    Argb, ColorEngine, CustomColor, CustomColorGroup, CustomScheme, NamedPalette, Scheme,
    SchemeRole, Schemes, Theme, TonalPalette,
};

// Chroma targets for the key palettes, in OKLCH units
const PRIMARY_MIN_CHROMA: f64 = 0.12;
const SECONDARY_CHROMA: f64 = 0.04;
const TERTIARY_CHROMA: f64 = 0.06;
const NEUTRAL_CHROMA: f64 = 0.01;
const NEUTRAL_VARIANT_CHROMA: f64 = 0.02;
const ERROR_HUE: f64 = 29.0 * PI / 180.0;
const ERROR_CHROMA: f64 = 0.19;
/// Tertiary hue offset from the source (60 degrees)
const TERTIARY_ROTATION: f64 = PI / 3.0;

/// The six key palettes of a theme.
#[derive(Debug, Clone, Copy)]
struct CorePalettes {
    primary: OklchPalette,
    secondary: OklchPalette,
    tertiary: OklchPalette,
    neutral: OklchPalette,
    neutral_variant: OklchPalette,
    error: OklchPalette,
}

impl CorePalettes {
    fn from_source(source: Argb) -> Self {
        let lch = argb_to_oklch(source);
        let seed = OklchPalette::new(lch.h, lch.c);
        Self {
            primary: seed.with_chroma(lch.c.max(PRIMARY_MIN_CHROMA)),
            secondary: seed.with_chroma(SECONDARY_CHROMA),
            tertiary: OklchPalette::new(normalize_hue(lch.h + TERTIARY_ROTATION), TERTIARY_CHROMA),
            neutral: seed.with_chroma(NEUTRAL_CHROMA),
            neutral_variant: seed.with_chroma(NEUTRAL_VARIANT_CHROMA),
            error: OklchPalette::new(ERROR_HUE, ERROR_CHROMA),
        }
    }

    fn named(&self) -> Vec<NamedPalette> {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("tertiary", self.tertiary),
            ("neutral", self.neutral),
            ("neutralVariant", self.neutral_variant),
            ("error", self.error),
        ]
        .into_iter()
        .map(|(name, palette)| {
            let palette: Arc<dyn TonalPalette> = Arc::new(palette);
            NamedPalette::new(name, palette)
        })
        .collect()
    }

    fn scheme(&self, dark: bool) -> Scheme {
        Scheme::from_fn(|role| {
            let (palette, light_tone, dark_tone) = self.role_tones(role);
            palette.tone(if dark { dark_tone } else { light_tone })
        })
    }

    /// Palette plus (light, dark) tone for each role.
    fn role_tones(&self, role: SchemeRole) -> (&OklchPalette, u8, u8) {
        use SchemeRole::*;
        match role {
            Primary => (&self.primary, 40, 80),
            OnPrimary => (&self.primary, 100, 20),
            PrimaryContainer => (&self.primary, 90, 30),
            OnPrimaryContainer => (&self.primary, 10, 90),
            Secondary => (&self.secondary, 40, 80),
            OnSecondary => (&self.secondary, 100, 20),
            SecondaryContainer => (&self.secondary, 90, 30),
            OnSecondaryContainer => (&self.secondary, 10, 90),
            Tertiary => (&self.tertiary, 40, 80),
            OnTertiary => (&self.tertiary, 100, 20),
            TertiaryContainer => (&self.tertiary, 90, 30),
            OnTertiaryContainer => (&self.tertiary, 10, 90),
            Error => (&self.error, 40, 80),
            OnError => (&self.error, 100, 20),
            ErrorContainer => (&self.error, 90, 30),
            OnErrorContainer => (&self.error, 10, 90),
            Background => (&self.neutral, 99, 10),
            OnBackground => (&self.neutral, 10, 90),
            Surface => (&self.neutral, 99, 10),
            OnSurface => (&self.neutral, 10, 90),
            SurfaceVariant => (&self.neutral_variant, 90, 30),
            OnSurfaceVariant => (&self.neutral_variant, 30, 80),
            Outline => (&self.neutral_variant, 50, 60),
            OutlineVariant => (&self.neutral_variant, 80, 30),
            Shadow => (&self.neutral, 0, 0),
            Scrim => (&self.neutral, 0, 0),
            InverseSurface => (&self.neutral, 20, 90),
            InverseOnSurface => (&self.neutral, 95, 20),
            InversePrimary => (&self.primary, 80, 40),
        }
    }
}

fn custom_color_group(engine: &OklchEngine, source: Argb, color: &CustomColor) -> CustomColorGroup {
    let value = if color.blend {
        engine.harmonize(color.value, source)
    } else {
        color.value
    };
    let palette = engine.palette_from(value);
    let scheme = |tones: [u8; 4]| CustomScheme {
        color: palette.tone(tones[0]),
        on_color: palette.tone(tones[1]),
        color_container: palette.tone(tones[2]),
        on_color_container: palette.tone(tones[3]),
    };

    CustomColorGroup {
        color: color.clone(),
        light: scheme([40, 100, 90, 10]),
        dark: scheme([80, 20, 30, 90]),
    }
}

/// Build a full theme seeded by `source`.
pub fn theme_from_source_color(
    engine: &OklchEngine,
    source: Argb,
    custom_colors: &[CustomColor],
) -> Theme {
    let core = CorePalettes::from_source(source);
    let custom_colors: Vec<CustomColorGroup> = custom_colors
        .iter()
        .map(|color| custom_color_group(engine, source, color))
        .collect();

    debug!(
        %source,
        custom_colors = custom_colors.len(),
        "Built theme from source color"
    );

    Theme {
        source,
        schemes: Schemes {
            light: core.scheme(false),
            dark: core.scheme(true),
        },
        palettes: core.named(),
        custom_colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oklab::argb_to_oklab;
    use toneprops_types::PaletteSource;

    fn theme() -> Theme {
        theme_from_source_color(
            &OklchEngine::new(),
            Argb::from_u32(0x40a673),
            &[
                CustomColor::new("customColor1", Argb::from_u32(0xd32f2f), true),
                CustomColor::new("customColor2", Argb::from_u32(0xd32f2f), false),
            ],
        )
    }

    #[test]
    fn test_theme_has_key_palettes_in_order() {
        let theme = theme();
        let names: Vec<_> = theme.palettes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["primary", "secondary", "tertiary", "neutral", "neutralVariant", "error"]
        );
        assert!(matches!(theme.palettes[0].source, PaletteSource::Tonal(_)));
    }

    #[test]
    fn test_light_and_dark_schemes_invert_surface() {
        let theme = theme();
        let light = argb_to_oklab(theme.schemes.light.surface).l;
        let dark = argb_to_oklab(theme.schemes.dark.surface).l;
        assert!(light > 0.9);
        assert!(dark < 0.2);
        assert_eq!(theme.schemes.light.shadow, Argb::BLACK);
        assert_eq!(theme.schemes.light.on_primary, Argb::WHITE);
    }

    #[test]
    fn test_blended_custom_color_differs_from_raw() {
        let theme = theme();
        assert_eq!(theme.custom_colors.len(), 2);
        let blended = &theme.custom_colors[0];
        let raw = &theme.custom_colors[1];
        assert!(blended.color.blend);
        assert_ne!(blended.light.color, raw.light.color);
        assert_eq!(raw.light.on_color, Argb::WHITE);
    }

    #[test]
    fn test_theme_build_logs_summary() {
        use tracing_mock::{expect, subscriber};

        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("Built theme from source color")))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            theme_from_source_color(&OklchEngine::new(), Argb::from_u32(0x15466e), &[]);
        });

        handle.assert_finished();
    }
}

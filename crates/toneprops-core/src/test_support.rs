// ABOUTME: Deterministic fake color engine and theme for unit tests
// ABOUTME: Tones and blends are simple channel arithmetic so hex values can be pinned

use std::sync::Arc;
use toneprops_types::{
    Argb, ColorEngine, CustomColor, CustomColorGroup, CustomScheme, NamedPalette, Scheme, Schemes,
    Theme, TonalPalette,
};

/// Keeps the seed's red and green, puts the tone in the blue channel.
#[derive(Debug, Clone, Copy)]
pub struct SeedRamp(pub Argb);

impl TonalPalette for SeedRamp {
    fn tone(&self, tone: u8) -> Argb {
        Argb::from_rgb(self.0.red(), self.0.green(), tone)
    }
}

/// Harmonize snaps to the source; blend interpolates each channel linearly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeEngine;

impl ColorEngine for FakeEngine {
    fn palette_from(&self, seed: Argb) -> Arc<dyn TonalPalette> {
        Arc::new(SeedRamp(seed))
    }

    fn harmonize(&self, _design: Argb, source: Argb) -> Argb {
        source
    }

    fn blend(&self, from: Argb, to: Argb, amount: f64) -> Argb {
        let mix = |a: u8, b: u8| {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * amount).round() as u8
        };
        Argb::from_rgb(
            mix(from.red(), to.red()),
            mix(from.green(), to.green()),
            mix(from.blue(), to.blue()),
        )
    }
}

pub const SOURCE: Argb = Argb::from_u32(0x40a673);

pub fn light_scheme() -> Scheme {
    Scheme {
        primary: Argb::from_u32(0x006d3f),
        on_primary: Argb::WHITE,
        surface: Argb::from_u32(0xf0f0f0),
        ..Scheme::uniform(Argb::from_u32(0xeeeeee))
    }
}

pub fn dark_scheme() -> Scheme {
    Scheme {
        primary: Argb::from_u32(0x7fdaa0),
        on_primary: Argb::from_u32(0x003920),
        surface: Argb::from_u32(0x101010),
        ..Scheme::uniform(Argb::from_u32(0x222222))
    }
}

pub fn custom_group(name: &str, value: u32, blend: bool) -> CustomColorGroup {
    CustomColorGroup {
        color: CustomColor::new(name, Argb::from_u32(value), blend),
        light: CustomScheme {
            color: Argb::from_u32(0xaa0000),
            on_color: Argb::WHITE,
            color_container: Argb::from_u32(0xffdad6),
            on_color_container: Argb::from_u32(0x410002),
        },
        dark: CustomScheme {
            color: Argb::from_u32(0xffb4ab),
            on_color: Argb::from_u32(0x690005),
            color_container: Argb::from_u32(0x93000a),
            on_color_container: Argb::from_u32(0xffdad6),
        },
    }
}

pub fn fake_theme() -> Theme {
    let primary: Arc<dyn TonalPalette> = Arc::new(SeedRamp(SOURCE));
    Theme {
        source: SOURCE,
        schemes: Schemes {
            light: light_scheme(),
            dark: dark_scheme(),
        },
        palettes: vec![
            NamedPalette::new("primary", primary),
            NamedPalette::new("neutralVariant", Argb::from_u32(0x777777)),
        ],
        custom_colors: vec![
            custom_group("warning", 0xd32f2f, true),
            custom_group("Custom Color", 0x1565c0, false),
        ],
    }
}

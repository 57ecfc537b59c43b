// ABOUTME: Tonal palette that walks OKLab lightness at a fixed hue and chroma
// ABOUTME: Tone 0 is black, tone 100 is white, chroma shrinks to stay in sRGB gamut

use crate::oklab::{Oklch, argb_to_oklch, clamp_oklch_to_srgb_gamut, oklch_to_argb};
use toneprops_types::{Argb, MAX_TONE, TonalPalette};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchPalette {
    /// Hue in radians
    pub hue: f64,
    /// Requested OKLCH chroma; individual tones may render with less
    pub chroma: f64,
}

impl OklchPalette {
    pub const fn new(hue: f64, chroma: f64) -> Self {
        Self { hue, chroma }
    }

    /// Palette keeping the seed's hue and chroma.
    pub fn from_seed(seed: Argb) -> Self {
        let lch = argb_to_oklch(seed);
        Self::new(lch.h, lch.c)
    }

    pub fn with_chroma(self, chroma: f64) -> Self {
        Self { chroma, ..self }
    }
}

impl TonalPalette for OklchPalette {
    fn tone(&self, tone: u8) -> Argb {
        match tone {
            0 => Argb::BLACK,
            t if t >= MAX_TONE => Argb::WHITE,
            t => {
                let lch = clamp_oklch_to_srgb_gamut(Oklch {
                    l: f64::from(t) / f64::from(MAX_TONE),
                    c: self.chroma,
                    h: self.hue,
                });
                oklch_to_argb(lch)
            }
        }
    }
}

// ABOUTME: ColorEngine implementation backed by OKLCH palettes
// ABOUTME: Hue harmonization and shortest-arc perceptual blending

use crate::oklab::{
    ACHROMATIC_CHROMA, Oklch, argb_to_oklch, clamp_oklch_to_srgb_gamut, hue_delta,
    normalize_hue, oklch_to_argb,
};
use crate::palette::OklchPalette;
use std::f64::consts::PI;
use std::sync::Arc;
use toneprops_logging::trace;
use toneprops_types::{Argb, ColorEngine, TonalPalette};

/// Largest hue rotation harmonization applies (15 degrees).
pub const MAX_HARMONIZE_ROTATION: f64 = PI / 12.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct OklchEngine;

impl OklchEngine {
    pub const fn new() -> Self {
        Self
    }
}

impl ColorEngine for OklchEngine {
    fn palette_from(&self, seed: Argb) -> Arc<dyn TonalPalette> {
        Arc::new(OklchPalette::from_seed(seed))
    }

    fn harmonize(&self, design: Argb, source: Argb) -> Argb {
        let design_lch = argb_to_oklch(design);
        let source_lch = argb_to_oklch(source);
        if design_lch.c < ACHROMATIC_CHROMA || source_lch.c < ACHROMATIC_CHROMA {
            return design;
        }

        let delta = hue_delta(design_lch.h, source_lch.h);
        if delta.abs() < 1e-9 {
            return design;
        }
        let rotation = (delta.abs() * 0.5).min(MAX_HARMONIZE_ROTATION) * delta.signum();
        let harmonized = clamp_oklch_to_srgb_gamut(Oklch {
            h: normalize_hue(design_lch.h + rotation),
            ..design_lch
        });

        let result = oklch_to_argb(harmonized);
        trace!(%design, %source, %result, rotation_deg = rotation.to_degrees(), "Harmonized color");
        result
    }

    fn blend(&self, from: Argb, to: Argb, amount: f64) -> Argb {
        let t = amount.clamp(0.0, 1.0);
        if t == 0.0 {
            return from;
        }
        if t == 1.0 {
            return to;
        }

        let a = argb_to_oklch(from);
        let b = argb_to_oklch(to);

        // An achromatic endpoint borrows the other endpoint's hue
        let (from_h, to_h) = match (a.c < ACHROMATIC_CHROMA, b.c < ACHROMATIC_CHROMA) {
            (true, false) => (b.h, b.h),
            (false, true) => (a.h, a.h),
            _ => (a.h, b.h),
        };

        let mixed = Oklch {
            l: a.l + (b.l - a.l) * t,
            c: a.c + (b.c - a.c) * t,
            h: normalize_hue(from_h + hue_delta(from_h, to_h) * t),
        };
        oklch_to_argb(clamp_oklch_to_srgb_gamut(mixed))
    }
}

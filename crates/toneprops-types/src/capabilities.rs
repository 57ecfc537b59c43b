// ABOUTME: Capability traits for the external perceptual color engine
// ABOUTME: Derivation code depends on these traits instead of a concrete engine

use crate::color::Argb;
use std::fmt::Debug;
use std::sync::Arc;

/// A tone-indexed family of colors derived from one seed.
///
/// `tone` must be in `0..=MAX_TONE`; callers validate before querying.
pub trait TonalPalette: Debug + Send + Sync {
    fn tone(&self, tone: u8) -> Argb;
}

/// Explicit conversion of a scheme-shaped value into its ordered roles.
pub trait RoleMap {
    /// camelCase role keys with their colors, in declaration order.
    fn roles(&self) -> Vec<(&'static str, Argb)>;
}

/// Palette construction and color mixing supplied by a color-science engine.
pub trait ColorEngine: Send + Sync {
    /// Build the tonal palette seeded by `seed`.
    fn palette_from(&self, seed: Argb) -> Arc<dyn TonalPalette>;

    /// Shift `design` toward `source` so the two read as related.
    fn harmonize(&self, design: Argb, source: Argb) -> Argb;

    /// Mix `from` toward `to`; `amount` 0 returns `from`, 1 returns `to`.
    fn blend(&self, from: Argb, to: Argb, amount: f64) -> Argb;
}

impl<T: ColorEngine + ?Sized> ColorEngine for &T {
    fn palette_from(&self, seed: Argb) -> Arc<dyn TonalPalette> {
        (**self).palette_from(seed)
    }

    fn harmonize(&self, design: Argb, source: Argb) -> Argb {
        (**self).harmonize(design, source)
    }

    fn blend(&self, from: Argb, to: Argb, amount: f64) -> Argb {
        (**self).blend(from, to, amount)
    }
}

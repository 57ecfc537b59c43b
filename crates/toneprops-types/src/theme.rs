// ABOUTME: Theme structure produced by a color engine and consumed read-only
// ABOUTME: Groups the source color, light/dark schemes, palettes, and custom colors

use crate::capabilities::TonalPalette;
use crate::color::Argb;
use crate::scheme::{CustomScheme, Scheme};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A palette entry is either an already-built palette or a seed to lift.
#[derive(Debug, Clone)]
pub enum PaletteSource {
    Tonal(Arc<dyn TonalPalette>),
    Seed(Argb),
}

impl From<Argb> for PaletteSource {
    fn from(seed: Argb) -> Self {
        PaletteSource::Seed(seed)
    }
}

impl From<Arc<dyn TonalPalette>> for PaletteSource {
    fn from(palette: Arc<dyn TonalPalette>) -> Self {
        PaletteSource::Tonal(palette)
    }
}

/// Palette keyed by its identifier-style name, e.g. `neutralVariant`.
#[derive(Debug, Clone)]
pub struct NamedPalette {
    pub name: String,
    pub source: PaletteSource,
}

impl NamedPalette {
    pub fn new(name: impl Into<String>, source: impl Into<PaletteSource>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schemes {
    pub light: Scheme,
    pub dark: Scheme,
}

impl Schemes {
    pub const fn for_brightness(&self, dark: bool) -> &Scheme {
        if dark { &self.dark } else { &self.light }
    }
}

/// A caller-supplied named color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColor {
    pub name: String,
    pub value: Argb,
    /// Harmonize toward the theme source before building the palette.
    pub blend: bool,
}

impl CustomColor {
    pub fn new(name: impl Into<String>, value: Argb, blend: bool) -> Self {
        Self {
            name: name.into(),
            value,
            blend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColorGroup {
    pub color: CustomColor,
    pub light: CustomScheme,
    pub dark: CustomScheme,
}

impl CustomColorGroup {
    pub const fn for_brightness(&self, dark: bool) -> &CustomScheme {
        if dark { &self.dark } else { &self.light }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub source: Argb,
    pub schemes: Schemes,
    pub palettes: Vec<NamedPalette>,
    pub custom_colors: Vec<CustomColorGroup>,
}

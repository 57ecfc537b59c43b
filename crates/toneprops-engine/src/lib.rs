// ABOUTME: Reference implementation of the color capabilities the token pipeline consumes
// ABOUTME: Builds tonal palettes, harmonizes and blends colors, and assembles whole themes

pub mod engine;
pub mod oklab;
pub mod palette;
pub mod theme;

pub use engine::OklchEngine;
pub use oklab::{Oklab, Oklch};
pub use palette::OklchPalette;
pub use theme::theme_from_source_color;

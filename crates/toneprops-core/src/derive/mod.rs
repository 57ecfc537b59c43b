// ABOUTME: Deriver functions that walk one theme structure each and emit tokens
// ABOUTME: Every deriver is pure; the orchestrator decides order and precedence

mod custom;
mod palette;
mod scheme;
mod surface;
mod variants;

pub use custom::{custom_role_token, derive_custom_palette_properties, derive_custom_scheme_properties};
pub use palette::{derive_palette_properties, resolve_palette};
pub use scheme::derive_scheme_properties;
pub use surface::{
    SurfaceContainerTone, derive_surface_container_properties, derive_surface_tint_properties,
};
pub use variants::rgb_properties;

use crate::error::{Result, TokenError};
use toneprops_types::MAX_TONE;

/// Tones are checked before any palette is queried.
pub(crate) fn check_tones(tones: &[u8]) -> Result<()> {
    match tones.iter().find(|&&tone| tone > MAX_TONE) {
        Some(&tone) => Err(TokenError::tone_out_of_range(tone)),
        None => Ok(()),
    }
}

// ABOUTME: Pure data types with no cross-crate dependencies
// ABOUTME: Foundation layer describing themes, schemes, and color capabilities

pub mod capabilities;
pub mod color;
pub mod scheme;
pub mod theme;

// Re-export commonly used types
pub use capabilities::{ColorEngine, RoleMap, TonalPalette};
pub use color::{Argb, ColorParseError, MAX_TONE};
pub use scheme::{CustomColorRole, CustomScheme, Scheme, SchemeRole};
pub use theme::{CustomColor, CustomColorGroup, NamedPalette, PaletteSource, Schemes, Theme};

// ABOUTME: Fixed semantic role vocabulary for color schemes
// ABOUTME: Scheme for the theme roles and CustomScheme for per-custom-color roles

use crate::capabilities::RoleMap;
use crate::color::Argb;
use serde::{Deserialize, Serialize};

macro_rules! scheme_roles {
    ($($variant:ident => $field:ident, $key:literal;)+) => {
        /// Semantic role of a color inside a [`Scheme`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SchemeRole {
            $($variant,)+
        }

        impl SchemeRole {
            /// Every role, in the order schemes enumerate them.
            pub const ALL: &'static [SchemeRole] = &[$(SchemeRole::$variant,)+];

            /// camelCase identifier of the role, e.g. `onPrimaryContainer`.
            pub const fn key(self) -> &'static str {
                match self {
                    $(SchemeRole::$variant => $key,)+
                }
            }
        }

        /// One brightness variant of a theme's semantic colors.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct Scheme {
            $(pub $field: Argb,)+
        }

        impl Scheme {
            pub const fn get(&self, role: SchemeRole) -> Argb {
                match role {
                    $(SchemeRole::$variant => self.$field,)+
                }
            }

            /// A scheme with every role set to `color`.
            pub const fn uniform(color: Argb) -> Self {
                Scheme { $($field: color,)+ }
            }

            fn slot_mut(&mut self, role: SchemeRole) -> &mut Argb {
                match role {
                    $(SchemeRole::$variant => &mut self.$field,)+
                }
            }
        }
    };
}

scheme_roles! {
    Primary => primary, "primary";
    OnPrimary => on_primary, "onPrimary";
    PrimaryContainer => primary_container, "primaryContainer";
    OnPrimaryContainer => on_primary_container, "onPrimaryContainer";
    Secondary => secondary, "secondary";
    OnSecondary => on_secondary, "onSecondary";
    SecondaryContainer => secondary_container, "secondaryContainer";
    OnSecondaryContainer => on_secondary_container, "onSecondaryContainer";
    Tertiary => tertiary, "tertiary";
    OnTertiary => on_tertiary, "onTertiary";
    TertiaryContainer => tertiary_container, "tertiaryContainer";
    OnTertiaryContainer => on_tertiary_container, "onTertiaryContainer";
    Error => error, "error";
    OnError => on_error, "onError";
    ErrorContainer => error_container, "errorContainer";
    OnErrorContainer => on_error_container, "onErrorContainer";
    Background => background, "background";
    OnBackground => on_background, "onBackground";
    Surface => surface, "surface";
    OnSurface => on_surface, "onSurface";
    SurfaceVariant => surface_variant, "surfaceVariant";
    OnSurfaceVariant => on_surface_variant, "onSurfaceVariant";
    Outline => outline, "outline";
    OutlineVariant => outline_variant, "outlineVariant";
    Shadow => shadow, "shadow";
    Scrim => scrim, "scrim";
    InverseSurface => inverse_surface, "inverseSurface";
    InverseOnSurface => inverse_on_surface, "inverseOnSurface";
    InversePrimary => inverse_primary, "inversePrimary";
}

impl Scheme {
    /// Build a scheme by resolving every role through `color_for`.
    pub fn from_fn(mut color_for: impl FnMut(SchemeRole) -> Argb) -> Self {
        let mut scheme = Scheme::uniform(Argb::BLACK);
        for &role in SchemeRole::ALL {
            *scheme.slot_mut(role) = color_for(role);
        }
        scheme
    }
}

impl RoleMap for Scheme {
    fn roles(&self) -> Vec<(&'static str, Argb)> {
        SchemeRole::ALL
            .iter()
            .map(|&role| (role.key(), self.get(role)))
            .collect()
    }
}

/// Roles of a custom color group; `color` is a placeholder for the group name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomColorRole {
    Color,
    OnColor,
    ColorContainer,
    OnColorContainer,
}

impl CustomColorRole {
    pub const ALL: &'static [CustomColorRole] = &[
        CustomColorRole::Color,
        CustomColorRole::OnColor,
        CustomColorRole::ColorContainer,
        CustomColorRole::OnColorContainer,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            CustomColorRole::Color => "color",
            CustomColorRole::OnColor => "onColor",
            CustomColorRole::ColorContainer => "colorContainer",
            CustomColorRole::OnColorContainer => "onColorContainer",
        }
    }
}

/// Role map for one brightness variant of a custom color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomScheme {
    pub color: Argb,
    pub on_color: Argb,
    pub color_container: Argb,
    pub on_color_container: Argb,
}

impl CustomScheme {
    pub const fn get(&self, role: CustomColorRole) -> Argb {
        match role {
            CustomColorRole::Color => self.color,
            CustomColorRole::OnColor => self.on_color,
            CustomColorRole::ColorContainer => self.color_container,
            CustomColorRole::OnColorContainer => self.on_color_container,
        }
    }
}

impl RoleMap for CustomScheme {
    fn roles(&self) -> Vec<(&'static str, Argb)> {
        CustomColorRole::ALL
            .iter()
            .map(|&role| (role.key(), self.get(role)))
            .collect()
    }
}

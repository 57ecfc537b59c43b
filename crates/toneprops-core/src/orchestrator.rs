// ABOUTME: Entry points that validate inputs, run every deriver, and merge the results
// ABOUTME: Owns the default tables; merge order decides which token wins a collision

use crate::Properties;
use crate::config::{TokenConfig, TokenConfigOverrides};
use crate::derive::{
    SurfaceContainerTone, derive_custom_palette_properties, derive_custom_scheme_properties,
    derive_palette_properties, derive_scheme_properties, derive_surface_container_properties,
    derive_surface_tint_properties, rgb_properties,
};
use crate::error::{Result, TokenError};
use crate::naming::tokenize;
use std::collections::HashMap;
use std::time::Duration;
use toneprops_logging::{PerfTimer, debug, instrument, warn};
use toneprops_types::{ColorEngine, CustomColorGroup, Theme};

pub const DEFAULT_TONES: [u8; 12] = [0, 5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

pub const DEFAULT_PALETTE_PREFIX: &str = "md-ref-palette-";
pub const DEFAULT_COLOR_PREFIX: &str = "md-sys-color-";
pub const DEFAULT_CUSTOM_COLOR_PREFIX: &str = "md-custom-color-";
pub const DEFAULT_RGB_SUFFIX: &str = "-rgb";

pub const DEFAULT_TINT_ROLES: [&str; 6] = [
    "surface-level0",
    "surface-level1",
    "surface-level2",
    "surface-level3",
    "surface-level4",
    "surface-level5",
];
pub const DEFAULT_TINT_RATIOS: [f64; 6] = [0.0, 0.05, 0.08, 0.11, 0.12, 0.14];

/// Surface container roles and their (light, dark) surface-palette tones.
pub const SURFACE_CONTAINER_TONES: [SurfaceContainerTone; 7] = [
    SurfaceContainerTone::new("surface-dim", 87, 6),
    SurfaceContainerTone::new("surface-bright", 98, 24),
    SurfaceContainerTone::new("surface-container-lowest", 100, 4),
    SurfaceContainerTone::new("surface-container-low", 96, 10),
    SurfaceContainerTone::new("surface-container", 94, 12),
    SurfaceContainerTone::new("surface-container-high", 92, 17),
    SurfaceContainerTone::new("surface-container-highest", 90, 22),
];

const SLOW_DERIVATION: Duration = Duration::from_millis(250);

/// Derive the token map using the defaults with `overrides` merged on top.
pub fn properties_from_theme(
    theme: &Theme,
    engine: &dyn ColorEngine,
    overrides: &TokenConfigOverrides,
) -> Result<Properties> {
    let config = TokenConfig::default().merged(overrides);
    properties_from_theme_with_config(theme, engine, &config)
}

/// Derive the token map for a fully resolved config.
///
/// Inputs are validated before any deriver runs, so an error never comes
/// with partial output.
#[instrument(
    level = "info",
    skip_all,
    fields(
        palettes = theme.palettes.len(),
        custom_colors = theme.custom_colors.len(),
        dark = config.dark
    )
)]
pub fn properties_from_theme_with_config(
    theme: &Theme,
    engine: &dyn ColorEngine,
    config: &TokenConfig,
) -> Result<Properties> {
    let _timer = PerfTimer::new("properties_from_theme").with_warn_threshold(SLOW_DERIVATION);

    config.validate()?;
    validate_theme(theme)?;
    check_custom_color_names(&theme.custom_colors, config.strict_custom_colors)?;

    let prefix = &config.prefix;
    let variants = brightness_variants(config);

    let palette = derive_palette_properties(theme, engine, &config.tones, &prefix.palette)?;
    debug!(tokens = palette.len(), "Derived palette tokens");

    let mut scheme = Properties::new();
    for &(dark, suffix) in &variants {
        scheme.extend(derive_scheme_properties(
            theme.schemes.for_brightness(dark),
            &prefix.color,
            suffix,
        )?);
    }
    debug!(tokens = scheme.len(), "Derived scheme tokens");

    let custom_palette = derive_custom_palette_properties(
        &theme.custom_colors,
        engine,
        theme.source,
        &config.tones,
        &prefix.palette,
    )?;
    let mut custom_scheme = Properties::new();
    for group in &theme.custom_colors {
        for &(dark, suffix) in &variants {
            custom_scheme.extend(derive_custom_scheme_properties(
                group,
                &prefix.custom_color,
                suffix,
                dark,
            )?);
        }
    }
    debug!(
        palette_tokens = custom_palette.len(),
        scheme_tokens = custom_scheme.len(),
        "Derived custom color tokens"
    );

    let mut tint = Properties::new();
    let mut container = Properties::new();
    for &(dark, suffix) in &variants {
        let scheme = theme.schemes.for_brightness(dark);
        tint.extend(derive_surface_tint_properties(
            scheme.surface,
            scheme.primary,
            theme.source,
            engine,
            &config.tint,
            &prefix.color,
            suffix,
        )?);
        container.extend(derive_surface_container_properties(
            scheme,
            engine,
            &SURFACE_CONTAINER_TONES,
            dark,
            &prefix.color,
            suffix,
        )?);
    }
    debug!(
        tint_tokens = tint.len(),
        container_tokens = container.len(),
        "Derived surface tokens"
    );

    // Elevation tints carry alpha and never get channel variants
    let mut rgb = Properties::new();
    if config.rgb.include {
        for map in [&palette, &scheme, &custom_palette, &custom_scheme, &container] {
            rgb.extend(rgb_properties(
                map,
                &config.rgb.suffix,
                config.rgb.separator,
                config.rgb.lenient,
            )?);
        }
        debug!(tokens = rgb.len(), "Derived rgb variants");
    }

    let mut properties = Properties::new();
    for map in [palette, scheme, custom_palette, custom_scheme, tint, container, rgb] {
        properties.extend(map);
    }

    debug!(tokens = properties.len(), "Derived token map");
    Ok(properties)
}

/// The unsuffixed active scheme, then both suffixed schemes when enabled.
fn brightness_variants(config: &TokenConfig) -> Vec<(bool, &'static str)> {
    let mut variants = vec![(config.dark, "")];
    if config.brightness_suffix {
        variants.push((false, "-light"));
        variants.push((true, "-dark"));
    }
    variants
}

/// Reject themes that cannot yield a meaningful token map.
pub fn validate_theme(theme: &Theme) -> Result<()> {
    if theme.palettes.is_empty() {
        return Err(TokenError::malformed_theme("theme has no palettes"));
    }

    if let Some(index) = theme
        .palettes
        .iter()
        .position(|palette| tokenize(&palette.name).is_empty())
    {
        return Err(TokenError::malformed_theme(format!(
            "palette at index {index} has an empty name"
        )));
    }

    if let Some(index) = theme
        .custom_colors
        .iter()
        .position(|group| tokenize(&group.color.name).is_empty())
    {
        return Err(TokenError::malformed_theme(format!(
            "custom color at index {index} has an empty name"
        )));
    }

    Ok(())
}

/// Detect custom colors whose names produce the same tokens.
///
/// In strict mode a collision is an error. Otherwise it is logged and the
/// later group's tokens overwrite the earlier ones.
pub fn check_custom_color_names(groups: &[CustomColorGroup], strict: bool) -> Result<()> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for group in groups {
        let token = tokenize(&group.color.name);
        let count = seen.entry(token.clone()).or_insert(0);
        *count += 1;
        if *count >= 2 {
            if strict {
                return Err(TokenError::duplicate_custom_color(group.color.name.clone()));
            }
            warn!(name = token.as_str(), "Custom color name collides; later group wins");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PrefixOverrides, RgbOverrides, TintOverrides};
    use crate::test_support::{FakeEngine, custom_group, fake_theme};
    use toneprops_types::SchemeRole;

    fn derive(overrides: TokenConfigOverrides) -> Result<Properties> {
        properties_from_theme(&fake_theme(), &FakeEngine, &overrides)
    }

    #[test]
    fn test_default_derivation_has_every_family() {
        let properties = derive(TokenConfigOverrides::default()).unwrap();

        assert_eq!(properties["--md-ref-palette-primary0"], "#40a600");
        assert_eq!(properties["--md-ref-palette-primary100"], "#40a664");
        assert_eq!(properties["--md-sys-color-primary"], "#006d3f");
        assert_eq!(properties["--md-sys-color-primary-rgb"], "0,109,63");
        assert_eq!(properties["--md-sys-color-primary-light"], "#006d3f");
        assert_eq!(properties["--md-sys-color-primary-dark"], "#7fdaa0");
        assert_eq!(properties["--md-custom-color-on-custom-color-dark"], "#690005");
        assert_eq!(properties["--md-sys-color-surface-dim"], "#f0f057");
        assert_eq!(properties["--md-sys-color-surface-level0"], "#f0f0f0");
        assert_eq!(properties["--md-sys-color-surface-level1-overlay"], "#40a6730d");
    }

    #[test]
    fn test_token_count_matches_families() {
        let theme = fake_theme();
        let properties = derive(TokenConfigOverrides::default()).unwrap();

        let tones = DEFAULT_TONES.len();
        let variants = 3;
        let palette = theme.palettes.len() * tones;
        let scheme = SchemeRole::ALL.len() * variants;
        let custom_palette = theme.custom_colors.len() * tones;
        let custom_scheme = theme.custom_colors.len() * 4 * variants;
        let tint = DEFAULT_TINT_ROLES.len() * 2 * variants;
        let container = SURFACE_CONTAINER_TONES.len() * variants;
        let colors = palette + scheme + custom_palette + custom_scheme + container;

        assert_eq!(properties.len(), colors + tint + colors);
    }

    #[test]
    fn test_dark_flag_switches_unsuffixed_scheme() {
        let properties = derive(TokenConfigOverrides {
            dark: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(properties["--md-sys-color-primary"], "#7fdaa0");
        assert_eq!(properties["--md-sys-color-primary-light"], "#006d3f");
        assert_eq!(properties["--md-custom-color-custom-color"], "#ffb4ab");
    }

    #[test]
    fn test_without_brightness_suffix() {
        let properties = derive(TokenConfigOverrides {
            brightness_suffix: Some(false),
            ..Default::default()
        })
        .unwrap();
        assert!(properties.contains_key("--md-sys-color-primary"));
        assert!(!properties.keys().any(|key| key.contains("-light") || key.contains("-dark")));
    }

    #[test]
    fn test_rgb_variants_can_be_disabled_or_respelled() {
        let without = derive(TokenConfigOverrides {
            rgb: Some(RgbOverrides {
                include: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();
        assert!(!without.keys().any(|key| key.ends_with("-rgb")));

        let spaced = derive(TokenConfigOverrides {
            rgb: Some(RgbOverrides {
                separator: Some(crate::rgb::RgbSeparator::Space),
                suffix: Some("-channels".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(spaced["--md-sys-color-primary-channels"], "0 109 63");
        assert!(!spaced.contains_key("--md-sys-color-surface-level1-channels"));
        assert!(!spaced.contains_key("--md-sys-color-surface-level1-overlay-channels"));
    }

    #[test]
    fn test_color_prefix_override_keeps_other_prefixes() {
        let properties = derive(TokenConfigOverrides {
            prefix: Some(PrefixOverrides {
                color: Some("test-color-".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .unwrap();
        assert!(properties.contains_key("--test-color-primary"));
        assert!(properties.contains_key("--md-ref-palette-primary40"));
        assert!(properties.contains_key("--md-custom-color-custom-color"));
        assert!(!properties.contains_key("--md-sys-color-primary"));
    }

    #[test]
    fn test_invalid_config_fails_before_output() {
        assert_eq!(
            derive(TokenConfigOverrides {
                tones: Some(vec![0, 101]),
                ..Default::default()
            }),
            Err(TokenError::ToneOutOfRange { tone: 101 })
        );
        assert_eq!(
            derive(TokenConfigOverrides {
                tint: Some(TintOverrides {
                    ratios: Some(vec![0.1]),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            Err(TokenError::TintTableMismatch { roles: 6, ratios: 1 })
        );
    }

    #[test]
    fn test_malformed_theme_is_rejected() {
        let mut theme = fake_theme();
        theme.palettes.clear();
        let err = properties_from_theme(&theme, &FakeEngine, &TokenConfigOverrides::default())
            .unwrap_err();
        assert!(err.is_theme_error());

        let mut theme = fake_theme();
        theme.custom_colors.push(custom_group(" - ", 0x123456, false));
        assert!(matches!(
            validate_theme(&theme),
            Err(TokenError::MalformedTheme { .. })
        ));
    }

    #[test]
    fn test_duplicate_custom_colors() {
        let mut theme = fake_theme();
        theme.custom_colors.push(custom_group("custom color", 0x000000, false));

        // Default: the later group overwrites the earlier one
        let properties =
            properties_from_theme(&theme, &FakeEngine, &TokenConfigOverrides::default()).unwrap();
        assert_eq!(properties["--md-ref-palette-custom-color40"], "#000028");

        let strict = TokenConfigOverrides {
            strict_custom_colors: Some(true),
            ..Default::default()
        };
        assert_eq!(
            properties_from_theme(&theme, &FakeEngine, &strict),
            Err(TokenError::duplicate_custom_color("custom color"))
        );
    }

    #[test]
    fn test_collision_warning_is_logged() {
        use tracing_mock::{expect, subscriber};

        let groups = [
            custom_group("brand", 0x111111, false),
            custom_group("Brand", 0x222222, false),
            custom_group("accent", 0x333333, false),
        ];

        let (subscriber, handle) = subscriber::mock()
            .event(
                expect::event()
                    .at_level(tracing::Level::WARN)
                    .with_fields(
                        expect::field("name")
                            .with_value(&"brand")
                            .and(expect::msg("Custom color name collides; later group wins")),
                    ),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            check_custom_color_names(&groups, false).unwrap();
        });

        handle.assert_finished();
    }

    #[test]
    fn test_every_repeated_name_is_logged() {
        use tracing_mock::{expect, subscriber};

        let groups = [
            custom_group("brand", 0x111111, false),
            custom_group("Brand", 0x222222, false),
            custom_group("BRAND", 0x333333, false),
        ];
        let collision = || {
            expect::event()
                .at_level(tracing::Level::WARN)
                .with_fields(expect::msg("Custom color name collides; later group wins"))
        };

        let (subscriber, handle) = subscriber::mock()
            .event(collision())
            .event(collision())
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            check_custom_color_names(&groups, false).unwrap();
        });

        handle.assert_finished();
    }

    #[test]
    fn test_later_families_win_shared_keys() {
        let mut theme = fake_theme();
        theme.custom_colors = vec![custom_group("primary", 0x123456, false)];
        let overrides = TokenConfigOverrides {
            prefix: Some(PrefixOverrides {
                custom_color: Some("md-sys-color-".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let properties = properties_from_theme(&theme, &FakeEngine, &overrides).unwrap();

        // Custom palette over theme palette, custom scheme over theme scheme
        assert_eq!(properties["--md-ref-palette-primary40"], "#123428");
        assert_eq!(properties["--md-sys-color-primary"], "#aa0000");
        assert_eq!(properties["--md-sys-color-primary-dark"], "#ffb4ab");
        assert_eq!(properties["--md-sys-color-primary-rgb"], "170,0,0");
        assert_eq!(properties["--md-sys-color-on-primary-container"], "#410002");
        // Roles the custom scheme does not produce keep the theme value
        assert_eq!(properties["--md-sys-color-secondary"], "#eeeeee");
    }

    #[test]
    fn test_derivation_span_records_inputs() {
        use tracing_mock::{expect, subscriber};

        let span = expect::span()
            .named("properties_from_theme_with_config")
            .at_level(tracing::Level::INFO);
        let (subscriber, handle) = subscriber::mock()
            .with_filter(|meta| meta.is_span() && meta.name() == "properties_from_theme_with_config")
            .new_span(
                span.clone().with_fields(
                    expect::field("palettes")
                        .with_value(&2_usize)
                        .and(expect::field("custom_colors").with_value(&2_usize))
                        .and(expect::field("dark").with_value(&true)),
                ),
            )
            .enter(span.clone())
            .exit(span.clone())
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            derive(TokenConfigOverrides {
                dark: Some(true),
                ..Default::default()
            })
            .unwrap();
        });

        handle.assert_finished();
    }

    #[test]
    fn test_token_counts_are_logged_per_family() {
        use tracing_mock::{expect, subscriber};

        let counted = |message: &str| {
            expect::event()
                .at_level(tracing::Level::DEBUG)
                .with_fields(expect::msg(message))
        };
        let (subscriber, handle) = subscriber::mock()
            .with_filter(|meta| meta.is_event() && *meta.level() == tracing::Level::DEBUG)
            .event(
                expect::event().with_fields(
                    expect::field("tokens")
                        .with_value(&24_usize)
                        .and(expect::msg("Derived palette tokens")),
                ),
            )
            .event(counted("Derived scheme tokens"))
            .event(counted("Derived custom color tokens"))
            .event(counted("Derived surface tokens"))
            .event(counted("Derived rgb variants"))
            .event(
                expect::event().with_fields(
                    expect::field("tokens")
                        .with_value(&396_usize)
                        .and(expect::msg("Derived token map")),
                ),
            )
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            derive(TokenConfigOverrides::default()).unwrap();
        });

        handle.assert_finished();
    }
}

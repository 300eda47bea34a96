// Host-side tests for field configuration: defaults, validation and string
// overrides.

use particle_field::constants::{config_attr, CONFIG_ATTR_PREFIX, DEFAULT_CANVAS_ID};
use particle_field::core::constants::*;
use particle_field::core::*;
use rand::SeedableRng;

#[test]
fn defaults_match_stock_background() {
    let c = FieldConfig::default();
    assert_eq!(c.count, 80);
    assert_eq!(c.speed_range, 0.25);
    assert_eq!(c.size_range, [1.0, 4.0]);
    assert_eq!(c.opacity_range, [0.2, 0.7]);
    assert_eq!(c.proximity_threshold, 120.0);
    assert_eq!(c.line_alpha_max, 0.1);
    assert_eq!(c.line_width, 1.0);
    assert_eq!(c.color, [0, 0, 0]);
    assert!(c.validate().is_ok());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(SIZE_MAX > SIZE_MIN && SIZE_MIN > 0.0);
    assert!(OPACITY_MAX > OPACITY_MIN && OPACITY_MIN >= 0.0 && OPACITY_MAX <= 1.0);
    assert!(LINE_ALPHA_MAX > 0.0 && LINE_ALPHA_MAX <= 1.0);
    assert!(PROXIMITY_THRESHOLD > 0.0);
    // the default population stays on the quadratic path
    assert!(GRID_MIN_PARTICLES > PARTICLE_COUNT);
}

#[test]
fn overrides_parse_known_keys() {
    let mut c = FieldConfig::default();
    c.apply_override("count", "150").unwrap();
    c.apply_override("speed-range", " 0.5 ").unwrap();
    c.apply_override("proximity-threshold", "90").unwrap();
    c.apply_override("opacity-min", "0.1").unwrap();
    c.apply_override("opacity-max", "0.9").unwrap();
    c.apply_override("size-min", "0.5").unwrap();
    c.apply_override("size-max", "2").unwrap();
    c.apply_override("line-alpha", "0.2").unwrap();
    c.apply_override("line-width", "1.5").unwrap();

    assert_eq!(c.count, 150);
    assert_eq!(c.speed_range, 0.5);
    assert_eq!(c.proximity_threshold, 90.0);
    assert_eq!(c.opacity_range, [0.1, 0.9]);
    assert_eq!(c.size_range, [0.5, 2.0]);
    assert_eq!(c.line_alpha_max, 0.2);
    assert_eq!(c.line_width, 1.5);
    assert!(c.validate().is_ok());
}

#[test]
fn every_listed_key_is_accepted() {
    for key in OVERRIDE_KEYS {
        let mut c = FieldConfig::default();
        assert!(c.apply_override(key, "1").is_ok(), "key {key} rejected");
    }
}

#[test]
fn unknown_key_and_bad_value_are_errors() {
    let mut c = FieldConfig::default();
    assert_eq!(
        c.apply_override("colour", "red"),
        Err(ConfigError::UnknownKey("colour".into()))
    );
    assert_eq!(
        c.apply_override("count", "-3"),
        Err(ConfigError::InvalidValue {
            key: "count".into(),
            value: "-3".into()
        })
    );
    assert_eq!(c, FieldConfig::default());
}

#[test]
fn validation_rejects_bad_ranges() {
    let inverted = FieldConfig {
        size_range: [4.0, 1.0],
        ..FieldConfig::default()
    };
    assert!(matches!(
        inverted.validate(),
        Err(ConfigError::EmptyRange { name: "size", .. })
    ));

    let opaque = FieldConfig {
        opacity_range: [0.5, 1.5],
        ..FieldConfig::default()
    };
    assert!(matches!(
        opaque.validate(),
        Err(ConfigError::OutOfUnitRange {
            name: "opacity-max",
            ..
        })
    ));

    let nan_speed = FieldConfig {
        speed_range: f64::NAN,
        ..FieldConfig::default()
    };
    assert!(nan_speed.validate().is_err());

    let thin = FieldConfig {
        line_width: 0.0,
        ..FieldConfig::default()
    };
    assert!(thin.validate().is_err());
}

#[test]
fn zero_speed_and_zero_count_are_allowed() {
    let c = FieldConfig {
        count: 0,
        speed_range: 0.0,
        ..FieldConfig::default()
    };
    assert!(c.validate().is_ok());
}

#[test]
fn config_errors_render_readably() {
    let e = ConfigError::UnknownKey("foo".into());
    assert_eq!(e.to_string(), "unknown config key `foo`");
}

#[test]
fn data_attribute_names() {
    assert_eq!(config_attr("count"), "data-particles-count");
    assert!(config_attr("line-alpha").starts_with(CONFIG_ATTR_PREFIX));
    assert!(!DEFAULT_CANVAS_ID.is_empty());
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(Rgba::new([0, 0, 0], 0.5).css(), "rgba(0, 0, 0, 0.5)");
    assert_eq!(Rgba::new([10, 20, 30], 1.0).css(), "rgba(10, 20, 30, 1)");
}

#[test]
fn count_above_cap_is_rejected_before_spawning() {
    let mut c = FieldConfig::default();
    c.apply_override("count", &usize::MAX.to_string()).unwrap();
    assert_eq!(
        c.validate(),
        Err(ConfigError::TooManyParticles {
            count: usize::MAX,
            max: MAX_PARTICLES
        })
    );

    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let res = ParticleField::new(c, Bounds::new(800.0, 600.0), &mut rng);
    assert!(matches!(res, Err(ConfigError::TooManyParticles { .. })));

    let at_cap = FieldConfig {
        count: MAX_PARTICLES,
        ..FieldConfig::default()
    };
    assert!(at_cap.validate().is_ok());
}

#[test]
fn huge_count_override_falls_back_to_defaults() {
    let c = FieldConfig::from_overrides([("count", "4294967295".to_string())]);
    assert_eq!(c, FieldConfig::default());
}

#[test]
fn unparsable_override_keeps_the_others() {
    let c = FieldConfig::from_overrides([
        ("count", "lots".to_string()),
        ("proximity-threshold", "90".to_string()),
        ("line-alpha", "0.2".to_string()),
    ]);
    assert_eq!(c.count, PARTICLE_COUNT);
    assert_eq!(c.proximity_threshold, 90.0);
    assert_eq!(c.line_alpha_max, 0.2);
}

#[test]
fn inverted_size_pair_gives_defaults() {
    let c = FieldConfig::from_overrides([
        ("size-min", "5".to_string()),
        ("size-max", "2".to_string()),
        ("count", "120".to_string()),
    ]);
    assert_eq!(c, FieldConfig::default());
}

#[test]
fn unknown_override_key_is_ignored() {
    let c = FieldConfig::from_overrides([
        ("colour", "red".to_string()),
        ("count", "40".to_string()),
    ]);
    assert_eq!(
        c,
        FieldConfig {
            count: 40,
            ..FieldConfig::default()
        }
    );
}

#[test]
fn no_overrides_gives_defaults() {
    let c = FieldConfig::from_overrides(std::iter::empty::<(&str, String)>());
    assert_eq!(c, FieldConfig::default());
}

#[test]
fn non_positive_radius_is_rejected() {
    let flat = FieldConfig {
        size_range: [0.0, 2.0],
        ..FieldConfig::default()
    };
    assert_eq!(
        flat.validate(),
        Err(ConfigError::NotPositive {
            name: "size-min",
            value: 0.0
        })
    );
}

use polygon_theme::{
    ColorScheme, ColorSystem, DesignTokenValidator, LookupError, Theme, ThemeHolder, ThemeSettings,
    ValidationError, SHADE_COUNT,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn is_lower_or_upper_hex(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn every_family_shade_is_a_hex_code_in_both_schemes() {
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let theme = Theme::new(scheme);
        for family in theme.colors().list_families() {
            for shade in 0..SHADE_COUNT {
                let hex = theme.get_color(family, shade).unwrap();
                assert!(is_lower_or_upper_hex(hex), "{scheme} {family}.{shade} = {hex}");
            }
        }
    }
}

#[test]
fn default_primary_then_shade_change() {
    let theme = Theme::default();
    let expected = theme.colors().get_color("blue", 6).unwrap().to_string();
    assert_eq!(theme.get_primary_color().unwrap(), expected);

    let changed = theme.with_primary_shade(5).unwrap();
    assert_eq!(changed.get_primary_color().unwrap(), "#339af0");
    // the original snapshot still reports shade 6
    assert_eq!(theme.get_primary_color().unwrap(), expected);
    assert_eq!(theme.primary_shade(), 6);
}

#[test]
fn negative_radius_never_produces_a_theme() {
    let settings = ThemeSettings {
        radius: BTreeMap::from([("xs".to_string(), -1)]),
        ..ThemeSettings::default()
    };
    assert_eq!(
        Theme::from_settings(&settings),
        Err(ValidationError::InvalidRadius {
            key: "xs".into(),
            value: -1,
        })
    );
}

#[test]
fn unregistered_alias_is_an_unknown_family() {
    let theme = Theme::default();
    assert_eq!(
        theme.get_color("accent", 3),
        Err(LookupError::UnknownFamily("accent".into()))
    );
    assert_eq!(
        theme.get_color("blue", 12),
        Err(LookupError::InvalidShadeIndex(12))
    );
}

#[test]
fn swatch_listing_is_deterministic() {
    let a = ColorSystem::default();
    let b = ColorSystem::default();
    assert_eq!(a.list_families(), b.list_families());
    assert_eq!(
        a.list_families(),
        vec![
            "blue", "cyan", "dark", "grape", "gray", "green", "indigo", "lime", "orange", "pink",
            "red", "slate", "teal", "violet", "yellow",
        ]
    );
}

#[test]
fn contrast_report_is_lazy_and_repeatable() {
    let system = ColorSystem::default();
    let validator = DesignTokenValidator::new(&system);
    let first: Vec<_> = validator.validate_color_contrasts().collect();
    let second: Vec<_> = validator.validate_color_contrasts().collect();
    assert_eq!(first, second);
    assert_eq!(
        validator.validate_color_contrasts().next().is_none(),
        validator.validate()
    );
}

#[test]
fn settings_json_drives_the_holder() {
    let holder = ThemeHolder::default();
    let settings = ThemeSettings::from_json(
        r#"{ "color_scheme": "dark", "primary_color": "success", "primary_shade": 8 }"#,
    )
    .unwrap();
    let theme = holder.apply_settings(&settings).unwrap();
    assert_eq!(theme.scheme(), ColorScheme::Dark);
    assert_eq!(theme.get_primary_color().unwrap(), "#2f9e44");
    assert_eq!(theme.to_settings(), settings);
}

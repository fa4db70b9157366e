use polygon_layout::{Breakpoint, ResponsiveValue};
use polygon_style::{
    generate_component_qss, generate_theme_qss, PropValue, StyleError, StyledComponent, STATES,
};
use polygon_theme::{ColorScheme, Theme};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn props(json: &str) -> BTreeMap<String, PropValue> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn button_contains_resolved_hex_and_every_state() {
    let theme = Theme::light();
    let qss = generate_component_qss("btn", &props(r#"{"bg": "blue.5"}"#), &theme).unwrap();

    assert!(qss.contains(theme.get_color("blue", 5).unwrap()));
    let mut last = 0;
    for state in STATES {
        let at = qss
            .find(&format!("#btn{state} {{"))
            .unwrap_or_else(|| panic!("missing {state}"));
        assert!(at > last, "{state} out of order");
        last = at;
    }
}

#[test]
fn generation_is_byte_identical() {
    let a = Theme::new(ColorScheme::Light);
    let b = Theme::new(ColorScheme::Light);
    assert_eq!(generate_theme_qss(&a), generate_theme_qss(&b));

    let p = props(r#"{"fz": "lg", "p": 12, "c": "dark", "bg": "teal.3", "radius": "xl"}"#);
    assert_eq!(
        generate_component_qss("card", &p, &a).unwrap(),
        generate_component_qss("card", &p, &b).unwrap()
    );
}

#[test]
fn light_and_dark_theme_sheets_differ_in_base_colors() {
    let light = generate_theme_qss(&Theme::light());
    let dark = generate_theme_qss(&Theme::dark());

    let widget = |sheet: &str| -> String {
        let start = sheet.find("QWidget {").unwrap();
        let end = start + sheet[start..].find('}').unwrap();
        sheet[start..end].to_string()
    };
    assert_ne!(widget(&light), widget(&dark));
}

#[test]
fn malformed_values_render_with_fallbacks() {
    let theme = Theme::light();
    let qss = generate_component_qss(
        "preview",
        &props(r#"{"bg": "nope.3", "c": "blue.99", "p": "huge", "fw": "heavy-ish"}"#),
        &theme,
    )
    .unwrap();

    let expected_base = format!(
        "#preview {{\n    background-color: {};\n    color: {};\n    padding: 16px;\n    font-weight: 400;\n}}\n",
        theme.default_background(),
        theme.default_text(),
    );
    assert!(qss.contains(&expected_base), "{qss}");
}

#[test]
fn empty_component_id_fails() {
    assert_eq!(
        generate_component_qss("", &BTreeMap::new(), &Theme::dark()),
        Err(StyleError::InvalidComponentId)
    );
}

#[test]
fn primary_shade_change_reaches_focus_outline() {
    let theme = Theme::default();
    let shade_5 = theme.with_primary_shade(5).unwrap();
    let p = BTreeMap::new();

    let before = generate_component_qss("x", &p, &theme).unwrap();
    let after = generate_component_qss("x", &p, &shade_5).unwrap();
    assert!(before.contains("outline: 2px solid #228be6;"));
    assert!(after.contains("outline: 2px solid #339af0;"));
}

#[test]
fn responsive_component_end_to_end() {
    let theme = Theme::light();
    let mut alert = StyledComponent::new("alert", 320).unwrap();
    alert.set_property(
        "p",
        ResponsiveValue::from_entries([(Breakpoint::Md, PropValue::token("xl"))]),
    );
    alert.set_property(
        "bg",
        ResponsiveValue::from_entries([
            (Breakpoint::Base, PropValue::token("red.1")),
            (Breakpoint::Lg, PropValue::token("red.2")),
        ]),
    );

    // no base entry: the narrowest defined entry applies below md
    let small = alert.style(&theme).unwrap();
    assert!(small.contains("padding: 32px;"));
    assert!(small.contains("background-color: #ffe3e3;"));

    let large = alert.on_resize(1100, &theme).unwrap();
    assert!(large.contains("background-color: #ffc9c9;"));
    assert!(large.contains("#alert:hover {\n    background-color: #ffa8a8;"));
}

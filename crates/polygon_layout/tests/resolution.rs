use polygon_layout::{resolve, Breakpoint, ResolveError, ResponsiveResolver, ResponsiveValue};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

#[test]
fn base_md_map_from_json() {
    let value: ResponsiveValue<String> =
        serde_json::from_str(r#"{"base": "xs", "md": "lg"}"#).unwrap();
    assert_eq!(resolve(&value, 499).map(String::as_str), Ok("xs"));
    assert_eq!(resolve(&value, 768).map(String::as_str), Ok("lg"));
    assert_eq!(resolve(&value, 1000).map(String::as_str), Ok("lg"));
}

#[test]
fn md_only_map_falls_back_below_md() {
    let value: ResponsiveValue<String> = serde_json::from_str(r#"{"md": "lg"}"#).unwrap();
    assert_eq!(resolve(&value, 100).map(String::as_str), Ok("lg"));
}

#[test]
fn literal_is_width_independent() {
    let value = ResponsiveValue::Literal(24);
    let widths = (0..4000).step_by(37).chain([u32::MAX]);
    for width in widths {
        assert_eq!(resolve(&value, width), Ok(&24));
    }
}

#[test]
fn resolver_tracks_resize_events() {
    let mut resolver: ResponsiveResolver<i32> = ResponsiveResolver::new(300);
    let gap: ResponsiveValue<i32> =
        ResponsiveValue::from_entries([(Breakpoint::Base, 4), (Breakpoint::Sm, 8), (Breakpoint::Xl, 16)]);
    resolver.set_property("gap", gap);
    resolver.set_property("columns", ResponsiveValue::Literal(1));

    let expected = |gap: i32| BTreeMap::from([("columns".to_string(), 1), ("gap".to_string(), gap)]);
    assert_eq!(resolver.resolved().unwrap(), expected(4));
    assert_eq!(resolver.on_resize(640).unwrap(), expected(8));
    assert_eq!(resolver.on_resize(1279).unwrap(), expected(8));
    assert_eq!(resolver.on_resize(1280).unwrap(), expected(16));
    assert_eq!(resolver.on_resize(0).unwrap(), expected(4));

    assert_eq!(resolver.property_names().collect::<Vec<_>>(), vec!["columns", "gap"]);
}

#[test]
fn empty_map_is_a_programmer_error() {
    let value: ResponsiveValue<String> = serde_json::from_str("{}").unwrap();
    assert_eq!(resolve(&value, 0), Err(ResolveError::EmptyResponsiveMap));
}

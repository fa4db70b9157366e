//! Literal-or-per-breakpoint values

use crate::breakpoint::{Breakpoint, BreakpointTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("responsive value has no breakpoint entries")]
    EmptyResponsiveMap,
}

/// A property value that is either fixed or varies per breakpoint.
///
/// Serialized untagged: a bare value is a literal, an object keyed by
/// breakpoint name (`{"base": .., "md": ..}`) is responsive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    Literal(T),
    Responsive(BTreeMap<Breakpoint, T>),
}

impl<T> ResponsiveValue<T> {
    pub fn from_entries(entries: impl IntoIterator<Item = (Breakpoint, T)>) -> Self {
        Self::Responsive(entries.into_iter().collect())
    }

    pub fn is_responsive(&self) -> bool {
        matches!(self, Self::Responsive(_))
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

/// Effective value at `width` using the default breakpoint table.
pub fn resolve<T>(value: &ResponsiveValue<T>, width: u32) -> Result<&T, ResolveError> {
    resolve_with(value, width, &BreakpointTable::DEFAULT)
}

/// Effective value at `width`.
///
/// Literals are returned unchanged. For a map, the entry of the widest
/// breakpoint whose minimum width is `<= width` wins. If no entry is at or
/// below `width`, the narrowest entry that exists is used instead, so a map
/// without `base` still resolves at small widths.
pub fn resolve_with<'v, T>(
    value: &'v ResponsiveValue<T>,
    width: u32,
    table: &BreakpointTable,
) -> Result<&'v T, ResolveError> {
    let map = match value {
        ResponsiveValue::Literal(v) => return Ok(v),
        ResponsiveValue::Responsive(map) => map,
    };

    Breakpoint::ALL
        .into_iter()
        .rev()
        .filter(|bp| table.min_width(*bp) <= width)
        .find_map(|bp| map.get(&bp))
        .or_else(|| map.values().next())
        .ok_or(ResolveError::EmptyResponsiveMap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_md() -> ResponsiveValue<&'static str> {
        ResponsiveValue::from_entries([(Breakpoint::Base, "xs"), (Breakpoint::Md, "lg")])
    }

    #[test]
    fn widest_matching_entry_wins() {
        let value = base_md();
        assert_eq!(resolve(&value, 0), Ok(&"xs"));
        assert_eq!(resolve(&value, 499), Ok(&"xs"));
        assert_eq!(resolve(&value, 767), Ok(&"xs"));
        assert_eq!(resolve(&value, 768), Ok(&"lg"));
        assert_eq!(resolve(&value, 1000), Ok(&"lg"));
        assert_eq!(resolve(&value, 4000), Ok(&"lg"));
    }

    #[test]
    fn missing_base_falls_back_to_narrowest_entry() {
        let value = ResponsiveValue::from_entries([(Breakpoint::Md, "lg")]);
        assert_eq!(resolve(&value, 100), Ok(&"lg"));

        let value = ResponsiveValue::from_entries([(Breakpoint::Xl, "xl"), (Breakpoint::Lg, "md")]);
        assert_eq!(resolve(&value, 10), Ok(&"md"));
        assert_eq!(resolve(&value, 1100), Ok(&"md"));
        assert_eq!(resolve(&value, 1300), Ok(&"xl"));
    }

    #[test]
    fn literal_ignores_width() {
        let value = ResponsiveValue::Literal(12);
        for width in [0, 1, 639, 640, 10_000, u32::MAX] {
            assert_eq!(resolve(&value, width), Ok(&12));
        }
    }

    #[test]
    fn empty_map_is_an_error() {
        let value: ResponsiveValue<i32> = ResponsiveValue::Responsive(BTreeMap::new());
        assert_eq!(resolve(&value, 800), Err(ResolveError::EmptyResponsiveMap));
    }

    #[test]
    fn custom_table() {
        let table = BreakpointTable::new(300, 500, 900, 1200).unwrap();
        let value = base_md();
        assert_eq!(resolve_with(&value, 499, &table), Ok(&"xs"));
        assert_eq!(resolve_with(&value, 500, &table), Ok(&"lg"));
    }

    #[test]
    fn deserializes_literal_or_map() {
        let literal: ResponsiveValue<String> = serde_json::from_str(r#""blue.5""#).unwrap();
        assert_eq!(literal, ResponsiveValue::Literal("blue.5".to_string()));

        let map: ResponsiveValue<String> =
            serde_json::from_str(r#"{"base": "xs", "md": "lg"}"#).unwrap();
        assert_eq!(resolve(&map, 800).map(String::as_str), Ok("lg"));

        assert!(serde_json::from_str::<ResponsiveValue<String>>(r#"{"huge": "xs"}"#).is_err());
    }
}

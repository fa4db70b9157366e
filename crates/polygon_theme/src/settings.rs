//! Persisted theme settings
//!
//! The settings record is the only theme state that leaves the process. The
//! core never touches storage: a [`SettingsStore`] supplied by the
//! application does the load/save, and every record is validated by building
//! a [`Theme`](crate::Theme) from it before it is applied.

use crate::error::ThemeError;
use crate::theme::{ColorScheme, DEFAULT_PRIMARY_COLOR};
use crate::tokens::DEFAULT_SHADE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Flat, serializable theme settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSettings {
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_primary_shade")]
    pub primary_shade: usize,
    /// Radius overrides by key (`"md": 6`)
    #[serde(default)]
    pub radius: BTreeMap<String, i32>,
}

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

fn default_primary_shade() -> usize {
    DEFAULT_SHADE
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            primary_color: default_primary_color(),
            primary_shade: default_primary_shade(),
            radius: BTreeMap::new(),
        }
    }
}

impl ThemeSettings {
    /// Parse a JSON record. Shape errors surface here; value checks happen
    /// when a theme is built from the record.
    pub fn from_json(src: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load/save hook implemented by the application's persistence layer
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<ThemeSettings>, ThemeError>;

    fn save(&self, settings: &ThemeSettings) -> Result<(), ThemeError>;
}

/// In-memory store holding the serialized JSON text
#[derive(Debug, Default)]
pub struct MemoryStore {
    json: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw JSON, as if a previous run had saved it.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Mutex::new(Some(json.into())),
        }
    }

    pub fn json(&self) -> Option<String> {
        self.json.lock().unwrap().clone()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<ThemeSettings>, ThemeError> {
        self.json
            .lock()
            .unwrap()
            .as_deref()
            .map(ThemeSettings::from_json)
            .transpose()
    }

    fn save(&self, settings: &ThemeSettings) -> Result<(), ThemeError> {
        let json = settings.to_json()?;
        *self.json.lock().unwrap() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = ThemeSettings::from_json(r#"{"color_scheme": "dark"}"#).unwrap();
        assert_eq!(settings.color_scheme, ColorScheme::Dark);
        assert_eq!(settings.primary_color, "blue");
        assert_eq!(settings.primary_shade, 6);
        assert!(settings.radius.is_empty());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ThemeSettings::from_json(r#"{"accent": "pink"}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Settings(_)));
    }

    #[test]
    fn negative_shade_fails_to_parse() {
        assert!(ThemeSettings::from_json(r#"{"primary_shade": -1}"#).is_err());
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        let settings = ThemeSettings {
            primary_color: "grape".into(),
            radius: BTreeMap::from([("lg".to_string(), 12)]),
            ..ThemeSettings::default()
        };
        store.save(&settings).unwrap();
        assert!(store.json().unwrap().contains("\"grape\""));
        assert_eq!(store.load().unwrap(), Some(settings));
    }
}

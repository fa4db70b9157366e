//! Theme settings persisted as a JSON file

use polygon_theme::{SettingsStore, ThemeError, ThemeSettings};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// [`SettingsStore`] backed by one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_error(&self, action: &str, err: std::io::Error) -> ThemeError {
        ThemeError::Store(format!("cannot {action} {}: {err}", self.path.display()))
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Option<ThemeSettings>, ThemeError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.store_error("read", err)),
        };
        ThemeSettings::from_json(&json).map(Some)
    }

    fn save(&self, settings: &ThemeSettings) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.store_error("create", err))?;
        }
        let mut json = settings.to_json()?;
        json.push('\n');
        fs::write(&self.path, json).map_err(|err| self.store_error("write", err))?;
        tracing::debug!(path = %self.path.display(), "saved theme settings");
        Ok(())
    }
}

//! PolyBook configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "polybook.toml";

/// Top-level PolyBook configuration (polybook.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct PolybookConfig {
    /// Theme settings JSON applied to every command
    #[serde(default)]
    pub settings: Option<PathBuf>,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Stylesheet export configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ExportConfig {
    /// Output directory
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
    /// Viewport width the components are resolved at
    #[serde(default = "default_export_width")]
    pub width: u32,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("qss")
}

fn default_export_width() -> u32 {
    1024
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
            width: default_export_width(),
        }
    }
}

impl PolybookConfig {
    /// Load an explicit config file; it must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config: PolybookConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // relative settings paths are relative to the config file
        if let (Some(settings), Some(dir)) = (&config.settings, path.parent()) {
            if settings.is_relative() {
                config.settings = Some(dir.join(settings));
            }
        }
        Ok(config)
    }

    /// Load `polybook.toml` from `dir`, or defaults if there is none.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

//! Manager configuration loaded from YAML or JSON.
//!
//! ```yaml
//! default_theme: light
//! storage_key: daisyui-theme
//! themes: [light, dark, forest]
//! dark_themes: [dark, forest]
//! reflow_delay_ms: 100
//! follow_system: false
//! ```
//!
//! Every field is optional. Without `themes` the DaisyUI catalog is used.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, ThemeCatalog, DAISYUI_DARK_THEMES, DAISYUI_THEMES};

/// Storage key used by the coaching site.
pub const DEFAULT_STORAGE_KEY: &str = "daisyui-theme";

/// Theme selected when nothing valid is stored.
pub const DEFAULT_THEME: &str = "light";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read theme config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid theme config YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("invalid theme config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("unsupported theme config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme")]
    pub default_theme: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Catalog themes in display order
    #[serde(default)]
    pub themes: Option<Vec<String>>,
    /// Dark subset of `themes`
    #[serde(default)]
    pub dark_themes: Option<Vec<String>>,
    #[serde(default = "default_reflow_delay_ms")]
    pub reflow_delay_ms: u64,
    /// Seed the first selection from the OS light/dark preference
    #[serde(default)]
    pub follow_system: bool,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_reflow_delay_ms() -> u64 {
    100
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            storage_key: default_storage_key(),
            themes: None,
            dark_themes: None,
            reflow_delay_ms: default_reflow_delay_ms(),
            follow_system: false,
        }
    }
}

impl ThemeConfig {
    /// Parses a YAML config.
    pub fn from_yaml_str(src: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(src)?)
    }

    /// Parses a JSON config.
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Loads a config file, choosing the parser from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content)
    }

    /// Builds the catalog this config describes.
    ///
    /// Without `themes`, the DaisyUI themes are used. Without `dark_themes`,
    /// the DaisyUI dark themes present in the catalog form the dark subset.
    pub fn catalog(&self) -> Result<ThemeCatalog, CatalogError> {
        let themes: Vec<String> = match &self.themes {
            Some(themes) => themes.clone(),
            None => DAISYUI_THEMES.iter().map(|t| t.to_string()).collect(),
        };
        let dark: Vec<String> = match &self.dark_themes {
            Some(dark) => dark.clone(),
            None => DAISYUI_DARK_THEMES
                .into_iter()
                .filter(|t| themes.iter().any(|theme| theme == t))
                .map(String::from)
                .collect(),
        };
        ThemeCatalog::new(themes, dark)
    }

    /// Returns `reflow_delay_ms` as a [`Duration`].
    pub fn reflow_delay(&self) -> Duration {
        Duration::from_millis(self.reflow_delay_ms)
    }
}

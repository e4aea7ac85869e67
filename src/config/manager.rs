use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PkError, Result};

/// Environment variable naming an explicit defaults file.
pub const CONFIG_ENV: &str = "PK_CONFIG";

const CONFIG_FILE_NAME: &str = "config.json";

/// Defaults read from the optional JSON configuration file.
///
/// Every key is optional; anything left out falls back to the built-in
/// default. `null` is the one key where an explicit JSON `null` differs from
/// leaving it out: it turns off the replacement text for empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub delimiters: Option<String>,
    pub separator: Option<String>,
    #[serde(deserialize_with = "explicit_null")]
    pub null: Option<Option<String>>,
    pub excludes: Option<Vec<String>>,
    pub empty: Option<bool>,
    pub backslash: Option<bool>,
    pub trim: Option<bool>,
}

fn explicit_null<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Locates and loads the defaults file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Uses `PK_CONFIG` when set, otherwise the platform config directory.
    pub fn new() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(Self::default_config_path);
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pk")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the defaults file. A missing file yields `Ok(None)`.
    pub fn load(&self) -> Result<Option<ConfigFile>> {
        let Some(path) = &self.path else {
            tracing::debug!("No configuration directory available");
            return Ok(None);
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No configuration file");
            return Ok(None);
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            PkError::io("read configuration", Some(path.display().to_string()), e)
        })?;
        let file = serde_json::from_str(&contents)
            .map_err(|e| PkError::config(path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Ok(Some(file))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

//! Settings saved by `study-buddy config`: the OpenRouter API key and a preferred model.
//!
//! Stored as JSON in `<config_dir>/settings.json`. On Unix the file is readable by the
//! owner only, since it may hold the key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::paths;

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("No config directory available")]
    NoConfigDir,
    #[error("Failed to write settings: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

pub fn settings_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join(SETTINGS_FILE))
}

/// Trimmed value, or `None` when blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl StoredSettings {
    /// Settings from the config directory. Missing or unreadable files give defaults.
    pub fn load() -> Self {
        settings_path().map(|p| Self::read(&p)).unwrap_or_default()
    }

    pub(crate) fn read(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        let settings: Self = serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
            Self::default()
        });
        Self {
            api_key: non_blank(settings.api_key),
            model: non_blank(settings.model),
        }
    }

    /// Write to the config directory and return the file path.
    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.write(&path)?;
        Ok(path)
    }

    pub(crate) fn write(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json + "\n")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    pub fn set_api_key(&mut self, key: &str) {
        self.api_key = non_blank(Some(key.to_string()));
    }

    pub fn set_model(&mut self, model: &str) {
        self.model = non_blank(Some(model.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = StoredSettings::read(&dir.path().join("settings.json"));
        assert_eq!(settings, StoredSettings::default());
    }

    #[test]
    fn write_then_read_keeps_key_and_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let mut settings = StoredSettings::default();
        settings.set_api_key("  sk-or-test  \n");
        settings.set_model("openai/gpt-4o-mini");
        settings.write(&path).unwrap();

        let loaded = StoredSettings::read(&path);
        assert_eq!(loaded.api_key.as_deref(), Some("sk-or-test"));
        assert_eq!(loaded.model.as_deref(), Some("openai/gpt-4o-mini"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn setting_the_model_keeps_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut settings = StoredSettings::default();
        settings.set_api_key("sk-1");
        settings.write(&path).unwrap();

        let mut settings = StoredSettings::read(&path);
        settings.set_model("meta/llama");
        settings.write(&path).unwrap();
        assert_eq!(StoredSettings::read(&path).api_key.as_deref(), Some("sk-1"));
    }

    #[test]
    fn invalid_or_blank_values_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(StoredSettings::read(&path), StoredSettings::default());

        fs::write(&path, r#"{"api_key": "   ", "model": "x/y"}"#).unwrap();
        let settings = StoredSettings::read(&path);
        assert_eq!(settings.api_key, None);
        assert_eq!(settings.model.as_deref(), Some("x/y"));
    }
}

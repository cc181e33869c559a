//! Loading and saving of application settings.
//!
//! Settings live in a small TOML file under the platform config directory.
//! A missing or unreadable file falls back to defaults with a logged
//! warning; nothing else in the app persists anything.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::AppSettings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Service rooted at the platform config dir, when one can be resolved.
    pub fn from_project_dirs() -> Option<Self> {
        let dirs = ProjectDirs::from("", "", "salus")?;
        Some(Self::new(dirs.config_dir().join("settings.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load(&self) -> AppSettings {
        match self.try_load() {
            Ok(Some(settings)) => settings,
            Ok(None) => AppSettings::default(),
            Err(err) => {
                log::warn!(
                    "Could not load settings from {}: {}; using defaults",
                    self.path.display(),
                    err
                );
                AppSettings::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<AppSettings>, SettingsError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(Some(toml::from_str(&raw)?))
    }

    pub fn save(&self, settings: &AppSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(settings)?)?;
        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ThemePreference;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("settings.toml"));
        assert_eq!(service.load(), AppSettings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

        let settings = AppSettings {
            theme: ThemePreference::Dark,
        };
        service.save(&settings).unwrap();
        assert_eq!(service.load(), settings);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = [not toml").unwrap();

        let service = SettingsService::new(path);
        assert_eq!(service.load(), AppSettings::default());
    }
}

//! Settings persistence and path resolution.
//!
//! Covers:
//! - `load` / `load_from` / `save` / `save_to` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`settings_path`, `settings_dir`)

use crate::error::SettingsError;
use crate::settings::Settings;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

impl Settings {
    /// Load settings from the default path, creating a default file on first run.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path();
        log::info!("Settings path: {:?}", path);

        if path.exists() {
            Self::load_from(&path)
        } else {
            log::info!("Settings file not found, creating default at {:?}", path);
            let settings = Self::default();
            if let Err(e) = settings.save() {
                log::error!("Failed to save default settings: {}", e);
                return Err(e);
            }
            Ok(settings)
        }
    }

    /// Load settings from an explicit path.
    ///
    /// A missing file yields the defaults without creating anything.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("Settings file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        log::info!("Loading settings from {:?}", path);
        let contents = fs::read_to_string(path).map_err(SettingsError::from)?;
        Ok(Self::from_yaml(&contents)?)
    }

    /// Parse settings from a YAML string. An empty document yields defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, SettingsError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(contents)?)
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path())
    }

    /// Save settings to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(SettingsError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(SettingsError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(SettingsError::from)?;
        fs::rename(&temp_path, path).map_err(SettingsError::from)?;

        log::debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Get the settings file path (using XDG convention)
    pub fn settings_path() -> PathBuf {
        Self::settings_dir().join("settings.yaml")
    }

    /// Get the settings directory path (using XDG convention)
    pub fn settings_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("chat-keys")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/chat-keys on every unix, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("chat-keys")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

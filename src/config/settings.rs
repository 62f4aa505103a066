//! Persistent settings, stored as JSON in the XDG config directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::XdgDirs;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_api_url() -> String {
    "http://127.0.0.1:3555".to_string()
}

fn default_bind_addr() -> String {
    "127.0.0.1:3555".to_string()
}

/// User settings shared by both binaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL the chat client uses to reach the travel API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Address the mock API service listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            bind_addr: default_bind_addr(),
        }
    }
}

impl Settings {
    /// Path of the settings file.
    pub fn path() -> PathBuf {
        XdgDirs::new().config.join("settings.json")
    }

    /// Load settings from disk.
    pub fn load() -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(Self::path())?;
        let mut settings: Self = serde_json::from_str(&data)?;
        settings.apply_env();
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing
    /// or unreadable. A malformed file is logged, not fatal.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(SettingsError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                let mut settings = Self::default();
                settings.apply_env();
                settings
            }
            Err(err) => {
                tracing::warn!("Failed to load settings, using defaults: {err}");
                let mut settings = Self::default();
                settings.apply_env();
                settings
            }
        }
    }

    /// Write settings to disk, creating the config directory if needed.
    pub fn save(&self) -> Result<(), SettingsError> {
        let dirs = XdgDirs::new();
        dirs.ensure_dirs()?;
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::path(), data)?;
        Ok(())
    }

    /// Environment variables override the file contents.
    fn apply_env(&mut self) {
        if let Ok(api_url) = std::env::var("VALISE_API_URL") {
            self.api_url = api_url;
        }
        if let Ok(bind_addr) = std::env::var("VALISE_BIND_ADDR") {
            self.bind_addr = bind_addr;
        }
    }
}

//! Configuration management for the workbench client
//!
//! Handles loading and saving client settings to ~/.config/bulb/config.json

use crate::api::{DatabaseType, NewDataSource};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the backend URL
pub const API_URL_ENV: &str = "BULB_API_URL";

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_notification_secs() -> u64 {
    5
}

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Backend base URL (the `/api/...` routes hang off it)
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Locale override (e.g., "pt-BR", "en"). If None, uses system locale
    #[serde(default)]
    pub locale: Option<String>,
    /// Where exports are saved. If None, the platform download directory
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Transport timeout. If None, requests wait as long as the connection does
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// How long toasts stay up
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
    /// Log file. If None, bulb.log next to the config file
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            locale: None,
            download_dir: None,
            request_timeout_secs: None,
            notification_secs: default_notification_secs(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Get the config directory (~/.config/bulb)
    fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Could not find config directory")?
            .join("bulb"))
    }

    fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load configuration from disk, creating a default file if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file.
    ///
    /// A missing file is written with defaults. A file that cannot be read
    /// or parsed is an error and is left untouched.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .context("Failed to read config file")?;

        let config: Self = serde_json::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Apply environment overrides (after `.env` has been loaded)
    pub fn apply_env(&mut self) {
        self.apply_api_url_override(std::env::var(API_URL_ENV).ok());
    }

    pub fn apply_api_url_override(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
    }

    /// Download directory, falling back to the platform one, then the cwd
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| Self::config_dir().ok().map(|d| d.join("bulb.log")))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}

/// Form state for the create-data-source modal
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSourceForm {
    pub name: String,
    pub database_type: DatabaseType,
    pub connection_string: String,
}

impl DataSourceForm {
    /// Total number of fields
    pub const FIELD_COUNT: usize = 3;

    /// Index of the database type selector
    pub const TYPE_FIELD: usize = 1;

    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Convert to a create request; None if a required field is blank
    pub fn to_new_data_source(&self) -> Option<NewDataSource> {
        let name = self.name.trim();
        let connection_string = self.connection_string.trim();
        if name.is_empty() || connection_string.is_empty() {
            return None;
        }
        Some(NewDataSource {
            name: name.to_string(),
            database_type: self.database_type,
            connection_string: connection_string.to_string(),
        })
    }

    /// Check if the form has all required fields filled
    pub fn is_valid(&self) -> bool {
        self.to_new_data_source().is_some()
    }

    /// Get field value by index (0-2)
    pub fn get_field(&self, index: usize) -> String {
        match index {
            0 => self.name.clone(),
            1 => self.database_type.to_string(),
            2 => self.connection_string.clone(),
            _ => String::new(),
        }
    }

    /// Get mutable text field by index; the type selector is not text
    pub fn get_field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.name),
            2 => Some(&mut self.connection_string),
            _ => None,
        }
    }

    /// Advance the database type selector
    pub fn cycle_database_type(&mut self) {
        self.database_type = self.database_type.next();
    }

    pub fn reset(&mut self) {
        *self = Self::new_empty();
    }

    /// Get field label key by index
    pub fn get_field_label(index: usize) -> &'static str {
        match index {
            0 => "Name",
            1 => "Type",
            2 => "Connection",
            _ => "",
        }
    }
}

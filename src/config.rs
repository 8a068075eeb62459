// src/config.rs
//
// Runtime configuration
//
// Read from `{config_dir}/garment-tracker/config.toml` when it exists.
// Every key is optional; missing keys take the defaults below.
//
// ```toml
// database_path = "/srv/tracker/garment-tracker.db"
// fx_base_url = "https://api.frankfurter.dev"
// account_email = "owner@example.com"
// account_uid = "owner"
// ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::integrations::frankfurter::DEFAULT_BASE_URL;

const APP_DIR: &str = "garment-tracker";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "garment-tracker.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub fx_base_url: String,
    /// Account signed in by the local identity provider
    pub account_email: String,
    pub account_uid: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            fx_base_url: DEFAULT_BASE_URL.to_string(),
            account_email: "owner@localhost".to_string(),
            account_uid: "local-owner".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the user's config file, or defaults when there is none
    pub fn load() -> AppResult<Self> {
        match config_file_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                log::debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read `path` if it exists; a missing file means defaults, an
    /// unreadable or invalid one is an error
    pub fn load_or_default(path: &Path) -> AppResult<Self> {
        if path.exists() {
            Self::from_path(path)
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let config = Self::from_toml_str(&raw)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.fx_base_url.trim().is_empty() {
            return Err(AppError::Config("fx_base_url must not be empty".to_string()));
        }
        if self.database_path.as_os_str().is_empty() {
            return Err(AppError::Config("database_path must not be empty".to_string()));
        }
        Ok(())
    }
}

pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DATABASE_FILE)
}

//! Settings for reaching the prediction service.
//!
//! Settings come from an optional `config.toml` inside the `.fitlab` folder:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//! ```
//!
//! `FITLAB_API_URL` overrides the configured base URL. A missing file yields
//! defaults; the file is never written by the application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable that overrides the prediction service base URL.
pub const API_URL_ENV: &str = "FITLAB_API_URL";
/// Base URL used when neither config nor environment name one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Errors that may occur while loading app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        /// Directory path that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        /// TOML file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
}

/// Top-level settings file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Prediction service connection settings.
    #[serde(default)]
    pub api: ApiSettings,
}

/// Persisted preferences for the prediction service.
///
/// Config keys: `base_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Scheme, host and optional path prefix; `/predict` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl AppSettings {
    /// Trim whitespace and trailing slashes, falling back to defaults when blank.
    pub fn normalized(mut self) -> Self {
        self.api.base_url = normalize_base_url(&self.api.base_url)
            .unwrap_or_else(default_base_url);
        self
    }

    /// Replace the base URL with a non-blank override.
    pub fn with_base_url_override(mut self, value: Option<&str>) -> Self {
        if let Some(url) = value.and_then(normalize_base_url) {
            self.api.base_url = url;
        }
        self
    }
}

fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Settings resolved at startup.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: AppSettings,
    /// Why the config folder was skipped, when it could not be prepared.
    pub fallback: Option<ConfigError>,
}

/// Load settings from disk and apply the environment override.
///
/// An unusable config folder falls back to defaults; only a config file that
/// exists but cannot be read or parsed is an error.
pub fn load_or_default() -> Result<LoadedSettings, ConfigError> {
    let (settings, fallback) = match config_path() {
        Ok(path) => (load_settings_from(&path)?, None),
        Err(err) => {
            tracing::warn!("Config folder unavailable, using defaults: {err}");
            (AppSettings::default(), Some(err))
        }
    };
    let env_override = std::env::var(API_URL_ENV).ok();
    Ok(LoadedSettings {
        settings: settings.with_base_url_override(env_override.as_deref()),
        fallback,
    })
}

/// Load settings from a specific path, returning defaults when it is missing.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

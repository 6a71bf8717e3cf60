//! Studio configuration
//!
//! Layering, lowest to highest: built-in defaults, `~/.redactie/config.toml`
//! (or an explicit path), the `GEMINI_API_KEY` environment variable. Command
//! line overrides are applied by the binary on top of the loaded value.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::ai::PromptLanguage;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Key sent as the `key` query parameter
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Language of assist instructions and annotations
    pub language: PromptLanguage,
    /// Whole-request timeout for assist calls
    pub timeout_secs: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            language: PromptLanguage::default(),
            timeout_secs: 60,
        }
    }
}

impl StudioConfig {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".redactie").join("config.toml"))
    }

    /// Load from `path` (or the default location) and apply the environment
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).or_else(Self::default_path);
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!("No config file at {:?}, using defaults", path);
                Self::default()
            }
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {}", API_KEY_ENV);
            self.api_key = Some(key);
        }
    }
}

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_BASE_URL;
use crate::core::{GenError, Model};

/// Optional user configuration, read from `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub model: Model,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("output.png")
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "nanobanana", "nanobanana-gen")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load config from an explicit file, or from the default location when
    /// one exists. Nothing is ever written back.
    pub fn load(explicit: Option<&Path>) -> Result<Self, GenError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, GenError> {
        let content = fs::read_to_string(path).map_err(|e| {
            GenError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, GenError> {
        toml::from_str(content).map_err(|e| GenError::Config(format!("Failed to parse config: {}", e)))
    }
}

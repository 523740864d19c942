//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::store::FOODS_KEY;
use crate::tracker::Requirements;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub requirements: RequirementsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the food list is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_key")]
    pub key: String,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("nutrition-tracker").to_string_lossy().to_string())
        .unwrap_or_else(|| "./nutrition_data".to_string())
}

fn default_key() -> String {
    FOODS_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
        }
    }
}

/// Daily targets used when a session starts
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementsConfig {
    #[serde(default = "default_calorie_req")]
    pub calorie_req: f64,

    #[serde(default = "default_protein_req")]
    pub protein_req: f64,
}

fn default_calorie_req() -> f64 {
    Requirements::default().calorie_req
}

fn default_protein_req() -> f64 {
    Requirements::default().protein_req
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        Self {
            calorie_req: default_calorie_req(),
            protein_req: default_protein_req(),
        }
    }
}

impl From<&RequirementsConfig> for Requirements {
    fn from(config: &RequirementsConfig) -> Self {
        Requirements {
            calorie_req: config.calorie_req,
            protein_req: config.protein_req,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("nutrition-tracker").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    pub fn requirements(&self) -> Requirements {
        Requirements::from(&self.requirements)
    }

    /// Storage directory with a leading `~/` expanded
    pub fn data_dir(&self) -> PathBuf {
        match (self.storage.data_dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.storage.data_dir),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Storage overrides
        if let Some(data_dir) = lookup("NUTRITION_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }

        // Requirement overrides
        if let Some(req) = lookup("NUTRITION_CALORIE_REQ").and_then(|v| v.parse().ok()) {
            self.requirements.calorie_req = req;
        }
        if let Some(req) = lookup("NUTRITION_PROTEIN_REQ").and_then(|v| v.parse().ok()) {
            self.requirements.protein_req = req;
        }

        // Logging overrides
        if let Some(level) = lookup("NUTRITION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("NUTRITION_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Nutrition Tracker Configuration
#
# Environment variables override these settings:
# - NUTRITION_DATA_DIR
# - NUTRITION_CALORIE_REQ
# - NUTRITION_PROTEIN_REQ
# - NUTRITION_LOG_LEVEL
# - NUTRITION_LOG_FORMAT

[storage]
# Directory holding the stored food list
data_dir = "~/.local/share/nutrition-tracker"

# Key (file name without .json) the list is stored under
key = "foods"

[requirements]
# Daily calorie target (kcal)
calorie_req = 2000.0

# Daily protein target (grams)
protein_req = 100.0

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    .to_string()
}

use crate::error::{MaptyError, Result};
use crate::ports::check_key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory for the file-backed slot
pub const DEFAULT_DATA_DIR: &str = ".mapty";

/// Default key the workout list is stored under
pub const DEFAULT_STORAGE_KEY: &str = "workouts";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Mapty
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub data_dir: ConfigValue<PathBuf>,
    pub storage_key: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(PathBuf::from(DEFAULT_DATA_DIR), ConfigSource::Default),
            storage_key: ConfigValue::new(DEFAULT_STORAGE_KEY.to_string(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| MaptyError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| MaptyError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(storage_key) = file_config.storage_key {
            let storage_key = parse_storage_key(&storage_key)?;
            self.storage_key.update(storage_key, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // MAPTY_DATA_DIR
        if let Ok(dir) = env::var("MAPTY_DATA_DIR") {
            if dir.trim().is_empty() {
                tracing::warn!("Ignoring empty MAPTY_DATA_DIR");
            } else {
                self.data_dir.update(PathBuf::from(dir), ConfigSource::Environment);
            }
        }

        // MAPTY_STORAGE_KEY
        if let Ok(key) = env::var("MAPTY_STORAGE_KEY") {
            match parse_storage_key(&key) {
                Ok(key) => self.storage_key.update(key, ConfigSource::Environment),
                Err(e) => tracing::warn!("Invalid MAPTY_STORAGE_KEY value '{}': {}", key, e),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir.update(data_dir, ConfigSource::Cli);
        }

        if let Some(storage_key) = overrides.storage_key {
            self.storage_key.update(storage_key, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );

        map.insert(
            "storage_key".to_string(),
            (self.storage_key.value.clone(), self.storage_key.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    storage_key: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub storage_key: Option<String>,
}

/// Parse a storage key, rejecting names the file slot cannot hold
pub fn parse_storage_key(s: &str) -> Result<String> {
    check_key(s).map_err(|e| MaptyError::ConfigInvalid {
        key: "storage_key".to_string(),
        reason: e.to_string(),
    })?;
    Ok(s.to_string())
}

//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use mapty_core::config::{parse_storage_key, CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "mapty.toml";

/// Load layered configuration: defaults, file, environment, then CLI flags
pub fn load_config(
    config_file: Option<&Path>,
    data_dir: Option<PathBuf>,
    key: Option<String>,
) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    match config_file {
        Some(path) => {
            config = config
                .load_from_file(path)
                .with_context(|| format!("Failed to load configuration file {}", path.display()))?;
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                config = config
                    .load_from_file(path)
                    .context("Failed to load configuration file")?;
            }
        }
    }

    let mut config = config.load_from_env();

    let storage_key = key.map(|k| parse_storage_key(&k)).transpose()?;
    config.update_from_cli(CliConfigOverrides {
        data_dir,
        storage_key,
    });

    Ok(config)
}

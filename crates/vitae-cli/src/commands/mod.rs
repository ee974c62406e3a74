//! Subcommand implementations.

pub mod config;
pub mod parse;
pub mod schema;
pub mod validate;

use std::path::{Path, PathBuf};

use vitae_core::VitaeConfig;

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitae")
        .join("config.json")
}

/// The explicit `--config` path, or the default location.
pub fn resolve_config_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the configuration file (defaults when absent) with environment overrides applied.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<VitaeConfig> {
    let path = resolve_config_path(config_path);

    let config = if path.exists() {
        VitaeConfig::from_file(&path)?
    } else if config_path.is_some() {
        anyhow::bail!("Config file not found: {}", path.display());
    } else {
        VitaeConfig::default()
    };

    Ok(config.with_env_overrides()?)
}

/// Read a file or fail with its path in the message.
pub fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(std::fs::read(path)?)
}

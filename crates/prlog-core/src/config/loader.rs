//! Configuration loading

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<Config> {
    info!(path = %path.display(), "loading config");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Io(e)
        }
    })?;

    let config = parse_config(&content)?;
    debug!(path = %path.display(), groups = config.label_groups.len(), "config loaded and validated");
    Ok(config)
}

/// Parse and validate configuration from YAML text
pub fn parse_config(yaml: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml).map_err(ConfigError::YamlError)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load configuration or fall back to the built-in defaults
pub fn load_config_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not load config, using defaults");
            Config::default()
        }
    }
}

//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::RdlConfig;
use std::path::Path;

/// Name of the configuration file looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "rdl.toml";

/// Loads and validates `<dir>/rdl.toml`.
///
/// A directory without the file yields the default configuration; any other
/// read failure is returned as [`ConfigError::IoError`].
pub fn load_config(dir: &Path) -> Result<RdlConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() && dir.is_dir() {
        return Ok(RdlConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `rdl.toml` document held in memory.
pub fn load_config_from_str(content: &str) -> Result<RdlConfig, ConfigError> {
    let config: RdlConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &RdlConfig) -> Result<(), ConfigError> {
    if config.parser.max_nesting_depth == 0 {
        return Err(ConfigError::ValidationError(
            "parser.max_nesting_depth must be at least 1".to_string(),
        ));
    }
    Ok(())
}

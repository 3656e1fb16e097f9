use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::TooltipError;

const CONFIG_DIR: &str = "brush-tooltip";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to surface when the file was rejected
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    };

    load_config_from_path(&path)
}

/// A missing file means defaults. An unreadable or invalid file also means
/// defaults, with the reason returned as a warning.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let loaded = match fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents, path),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(TooltipError::ConfigRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    };

    match loaded {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("using default configuration: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config, TooltipError> {
    let config: Config = toml::from_str(content).map_err(|e| TooltipError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;

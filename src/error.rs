use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and validating tooltip configuration.
///
/// Tooltip event handling itself never fails; anything unexpected there
/// degrades to a hidden or unchanged label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TooltipError {
    #[error("Could not read config file {path}: {message}")]
    ConfigRead { path: PathBuf, message: String },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

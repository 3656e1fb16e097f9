//! Configuration
//!
//! Optional TOML file at `~/.config/brush-tooltip/config.toml`. Every
//! field has a default, so an empty or missing file is valid.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path, parse_config};
pub use types::{Config, LabelConfig, PositionConfig, TooltipConfig};

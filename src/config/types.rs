// Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TooltipError;
use crate::tooltip::{AttachMode, FloatingLabel, PositionPolicy, TooltipOptions};

/// Tooltip behavior section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub hide_delay_ms: u64,
    pub initial_text: String,
    pub hover_selectors: Vec<String>,
    pub attach_mode: AttachMode,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        let options = TooltipOptions::default();
        TooltipConfig {
            hide_delay_ms: options.hide_delay.as_millis() as u64,
            initial_text: options.initial_text,
            hover_selectors: options.hover_selectors,
            attach_mode: options.attach_mode,
        }
    }
}

/// Label placement section, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PositionConfig {
    pub offset: f64,
    pub label_width_estimate: f64,
    pub half_label_height: f64,
}

impl Default for PositionConfig {
    fn default() -> Self {
        PositionConfig {
            offset: 2.0,
            label_width_estimate: 30.0,
            half_label_height: 1.0,
        }
    }
}

/// Floating label section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelConfig {
    pub id: String,
    pub horizontal_padding: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        LabelConfig {
            id: "tooltip".to_string(),
            horizontal_padding: 2.0,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub position: PositionConfig,
    #[serde(default)]
    pub label: LabelConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), TooltipError> {
        if let Some(index) = self
            .tooltip
            .hover_selectors
            .iter()
            .position(|selector| selector.trim().is_empty())
        {
            return Err(TooltipError::InvalidOption(format!(
                "tooltip.hover_selectors[{index}] must not be empty"
            )));
        }
        let estimate = self.position.label_width_estimate;
        if estimate.is_nan() || estimate <= 0.0 {
            return Err(TooltipError::InvalidOption(
                "position.label_width_estimate must be positive".to_string(),
            ));
        }
        if !self.position.offset.is_finite() || !self.position.half_label_height.is_finite() {
            return Err(TooltipError::InvalidOption(
                "position offsets must be finite".to_string(),
            ));
        }
        if self.label.id.trim().is_empty() {
            return Err(TooltipError::InvalidOption(
                "label.id must not be empty".to_string(),
            ));
        }
        let padding = self.label.horizontal_padding;
        if padding.is_nan() || padding < 0.0 {
            return Err(TooltipError::InvalidOption(
                "label.horizontal_padding must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn position_policy(&self) -> PositionPolicy {
        PositionPolicy {
            offset: self.position.offset,
            label_width_estimate: self.position.label_width_estimate,
            half_label_height: self.position.half_label_height,
        }
    }

    pub fn tooltip_options(&self) -> TooltipOptions {
        TooltipOptions {
            initial_text: self.tooltip.initial_text.clone(),
            hover_selectors: self.tooltip.hover_selectors.clone(),
            hide_delay: Duration::from_millis(self.tooltip.hide_delay_ms),
            attach_mode: self.tooltip.attach_mode,
            position: self.position_policy(),
        }
    }

    pub fn floating_label(&self) -> FloatingLabel {
        FloatingLabel::new(self.label.id.clone()).with_horizontal_padding(self.label.horizontal_padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_match_tooltip_options() {
        let config = Config::default();
        let options = config.tooltip_options();

        assert_eq!(options.hide_delay, Duration::from_millis(200));
        assert_eq!(
            options.hover_selectors,
            vec![".selection", ".handle--e", ".handle--w"]
        );
        assert_eq!(options.attach_mode, AttachMode::Replace);
        assert_eq!(options.position.label_width_estimate, 30.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_floating_label_from_config() {
        let mut config = Config::default();
        config.label.id = "range-tip".to_string();
        config.label.horizontal_padding = 1.0;

        let label = config.floating_label();

        assert_eq!(label.id(), "range-tip");
        assert_eq!(label.horizontal_padding(), 1.0);
    }

    #[test]
    fn test_validate_rejects_empty_selector() {
        let mut config = Config::default();
        config.tooltip.hover_selectors.push("  ".to_string());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("hover_selectors[3]"));
    }

    #[test]
    fn test_validate_rejects_non_positive_estimate() {
        let mut config = Config::default();
        config.position.label_width_estimate = 0.0;
        assert!(config.validate().is_err());

        config.position.label_width_estimate = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_label_id() {
        let mut config = Config::default();
        config.label.id = String::new();
        assert!(matches!(
            config.validate(),
            Err(TooltipError::InvalidOption(_))
        ));
    }

    #[test]
    fn test_config_serializes_back_to_toml() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    // Valid attach modes parse to the matching variant
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_attach_mode_parsing(mode in prop::sample::select(vec!["replace", "cumulative"])) {
            let toml_content = format!(r#"
[tooltip]
attach_mode = "{}"
"#, mode);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid attach mode: {}", mode);

            let config = config.unwrap();
            let expected = match mode {
                "replace" => AttachMode::Replace,
                "cumulative" => AttachMode::Cumulative,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.tooltip.attach_mode, expected);
        }
    }

    // Any subset of fields parses, and missing fields take their defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_tooltip_section in prop::bool::ANY,
            include_delay in prop::bool::ANY,
            delay in 0u64..10_000,
            include_position_section in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_tooltip_section {
                toml_content.push_str("[tooltip]\n");
                if include_delay {
                    toml_content.push_str(&format!("hide_delay_ms = {}\n", delay));
                }
            }
            if include_position_section {
                toml_content.push_str("[position]\noffset = 3.0\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let config = config.unwrap();

            if include_tooltip_section && include_delay {
                prop_assert_eq!(config.tooltip.hide_delay_ms, delay);
            } else {
                prop_assert_eq!(config.tooltip.hide_delay_ms, 200);
            }
            prop_assert_eq!(&config.tooltip.hover_selectors, &TooltipConfig::default().hover_selectors);
            prop_assert_eq!(config.label.id.as_str(), "tooltip");
            if include_position_section {
                prop_assert_eq!(config.position.offset, 3.0);
                prop_assert_eq!(config.position.half_label_height, 1.0);
            }
        }
    }
}

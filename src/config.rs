//! Dashboard configuration.
//!
//! Every field has a default, so an absent config file means "defaults".
//! A config path given explicitly must exist and parse.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::model::{PAYLOAD_MAX_KG, PAYLOAD_MIN_KG};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV loaded at startup.
    pub data_path: PathBuf,

    /// Header names of the four required columns.
    pub columns: ColumnNames,

    /// Payload range control.
    pub slider: SliderConfig,

    /// Initial window size.
    pub window: WindowConfig,
}

/// Header names of the required CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub launch_site: String,
    pub payload_mass: String,
    pub booster_version: String,
    pub outcome_class: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            launch_site: "Launch Site".to_string(),
            payload_mass: "Payload Mass (kg)".to_string(),
            booster_version: "Booster Version".to_string(),
            outcome_class: "class".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    /// Snap increment of both handles, in kg.
    pub step: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: PAYLOAD_MIN_KG,
            max: PAYLOAD_MAX_KG,
            step: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 900.0,
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_owned(),
            source: e,
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject slider and window settings the UI cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.slider;
        if !(s.min >= PAYLOAD_MIN_KG && s.min < s.max && s.max <= PAYLOAD_MAX_KG) {
            return Err(ConfigError::Invalid(format!(
                "slider bounds must satisfy {PAYLOAD_MIN_KG} <= min < max <= {PAYLOAD_MAX_KG}, got [{}, {}]",
                s.min, s.max
            )));
        }
        if s.step.is_nan() || s.step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "slider step must be positive, got {}",
                s.step
            )));
        }
        let w = &self.window;
        if !(w.width > 0.0 && w.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                w.width, w.height
            )));
        }
        Ok(())
    }

    /// Serialized defaults, for `--print-config`.
    pub fn example_json() -> String {
        serde_json::to_string_pretty(&Config::default()).unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            columns: ColumnNames::default(),
            slider: SliderConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

/// Configuration errors. All of them abort startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

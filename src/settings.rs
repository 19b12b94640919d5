//! Settings for the qupo GUI
//!
//! Read from a TOML file. The path comes from `QUPO_GUI_CONFIG`, otherwise
//! `<config dir>/qupo-gui/settings.toml`. A missing file means defaults.

use crate::error::{Error, Result};
use crate::weights::{WeightKey, WeightsMap, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "QUPO_GUI_CONFIG";

// =============================================================================
// Settings Data Structures
// =============================================================================

/// Theme settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default = "default_theme_mode")]
    pub mode: String,
}

fn default_theme_mode() -> String { "dark".to_string() }

impl Default for ThemeSettings {
    fn default() -> Self {
        Self { mode: default_theme_mode() }
    }
}

/// Range and step the preview sliders use
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    #[serde(default = "default_weight_min")]
    pub min: f64,
    #[serde(default = "default_weight_max")]
    pub max: f64,
    #[serde(default = "default_weight_step")]
    pub step: f64,
}

fn default_weight_min() -> f64 { 0.0 }
fn default_weight_max() -> f64 { 1.0 }
fn default_weight_step() -> f64 { 0.05 }

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: default_weight_min(),
            max: default_weight_max(),
            step: default_weight_step(),
        }
    }
}

impl WeightRange {
    pub fn validate(&self) -> Result<()> {
        if !(self.min < self.max) || !(self.step > 0.0) {
            return Err(Error::InvalidWeightRange {
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber` filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "info".to_string() }

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

/// All settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeSettings,
    /// Symbols shown by the preview symbol list
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    /// Weights the preview starts from
    #[serde(default = "default_weights")]
    pub weights: WeightsMap,
    #[serde(default)]
    pub weight_range: WeightRange,
    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_symbols() -> Vec<String> {
    vec!["AAPL".to_string(), "MSFT".to_string(), "TSLA".to_string()]
}

fn default_weights() -> WeightsMap {
    WeightsMap::from_pairs([
        (WeightKey::risk(), DEFAULT_WEIGHT),
        (WeightKey::esg(), DEFAULT_WEIGHT),
    ])
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            symbols: default_symbols(),
            weights: default_weights(),
            weight_range: WeightRange::default(),
            logging: LoggingSettings::default(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("qupo-gui").join("settings.toml")),
        }
    }

    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.weight_range.validate()?;
        Ok(settings)
    }
}

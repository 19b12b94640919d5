//! Error types for the qupo GUI
//!
//! The overview panel itself never fails; these cover the settings file,
//! the model catalog and calculation requests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Settings file is not valid TOML for [`crate::settings::Settings`].
    #[error("invalid settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Weight range with `min >= max` or a non-positive step.
    #[error("invalid weight range: min={min}, max={max}, step={step}")]
    InvalidWeightRange { min: f64, max: f64, step: f64 },

    /// Model identifier not in the catalog.
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// A calculation needs at least one model and one symbol.
    #[error("empty selection: {0}")]
    EmptySelection(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Error types for core module
//!
//! Covers configuration loading and route parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file could not be read
    #[error("Settings I/O error at {path:?}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for [`super::AppConfig`]
    #[error("Settings serialization error at {path:?}: {source}")]
    SettingsSerialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A configuration value could not be interpreted
    #[error("Invalid value for {key}: {message}")]
    InvalidSetting { key: &'static str, message: String },

    /// Path that names none of the screens
    #[error("Unknown route: {path}")]
    InvalidRoute { path: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

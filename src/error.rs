//! Error handling for the installation verifier
//!
//! Probe failures are not errors: a missing element or a failed GES init is
//! an ordinary, reportable outcome. The types here cover tool failures only,
//! such as unreadable configuration or an unwritable report path.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the verifier
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("GStreamer runtime initialization failed: {0}")]
    RuntimeInit(String),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration parsing failed: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration value: {field} = {value}")]
    InvalidConfigValue { field: String, value: String },

    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Result type alias for convenience
pub type VerifyResult<T> = std::result::Result<T, VerifyError>;

impl From<glib::Error> for VerifyError {
    fn from(err: glib::Error) -> Self {
        VerifyError::RuntimeInit(err.to_string())
    }
}

impl From<toml::de::Error> for VerifyError {
    fn from(err: toml::de::Error) -> Self {
        VerifyError::ConfigParse(err.to_string())
    }
}

impl From<std::io::Error> for VerifyError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                VerifyError::Unexpected(format!("File not found: {}", err))
            }
            _ => VerifyError::Unexpected(format!("I/O error: {}", err)),
        }
    }
}

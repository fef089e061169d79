//! Probe configuration
//!
//! The default probe list mirrors the classic GStreamer plugin split: one
//! representative element from each of the optional plugin packages. A TOML
//! file can replace the list for site-specific installs.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// A single element probe: the element to instantiate and the plugin
/// package expected to provide it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeEntry {
    /// Element factory name, e.g. "hlssink"
    pub element: String,
    /// Originating package label, e.g. "gst-plugins-bad"
    pub package: String,
}

impl ProbeEntry {
    pub fn new(element: &str, package: &str) -> Self {
        Self {
            element: element.to_string(),
            package: package.to_string(),
        }
    }
}

/// Complete verifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Whether to initialize and report on GStreamer Editing Services
    #[serde(default = "default_check_ges")]
    pub check_ges: bool,
    /// Ordered list of element probes
    #[serde(default = "default_probes")]
    pub probes: Vec<ProbeEntry>,
}

fn default_check_ges() -> bool {
    true
}

fn default_probes() -> Vec<ProbeEntry> {
    vec![
        ProbeEntry::new("alpha", "gst-plugins-good"),
        ProbeEntry::new("hlssink", "gst-plugins-bad"),
        ProbeEntry::new("asfdemux", "gst-plugins-ugly"),
        ProbeEntry::new("avdec_aac", "gst-libav"),
    ]
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            check_ges: default_check_ges(),
            probes: default_probes(),
        }
    }
}

impl VerifyConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileReadError(path.to_path_buf(), e))?;

        let config: VerifyConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("TOML parse error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_toml_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(format!("TOML serialize error: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::FileWriteError(path.to_path_buf(), e))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        for probe in &self.probes {
            if probe.element.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "probe element name must not be empty".to_string(),
                ));
            }
            if probe.package.is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "probe '{}' has an empty package label",
                    probe.element
                )));
            }
        }

        // Duplicate probes would produce ambiguous per-element reporting
        for (i, probe) in self.probes.iter().enumerate() {
            if self.probes[..i].iter().any(|p| p.element == probe.element) {
                return Err(ConfigError::InvalidValue(format!(
                    "duplicate probe for element '{}'",
                    probe.element
                )));
            }
        }

        Ok(())
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileReadError(PathBuf, std::io::Error),

    #[error("Failed to write config file {0}: {1}")]
    FileWriteError(PathBuf, std::io::Error),

    #[error("Config parse error: {0}")]
    ParseError(String),

    #[error("Config serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

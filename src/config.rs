//! YAML configuration file support.
//!
//! Normalization and rendering settings can live in one YAML file and be
//! loaded at runtime, by the `tdiff` CLI or by library callers.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "podcast-qa"
//!
//! normalization:
//!   version: 1
//!   case_sensitive: false
//!   strip_punctuation: true
//!   fold_diacritics: true
//!   number_words: true
//!   language: "en"
//!   equivalence_pairs:
//!     - ["okay", "ok"]
//!
//! render:
//!   style: "inline"
//!   color: true
//!   show_removed: true
//! ```
//!
//! Every section is optional and falls back to its defaults.

use std::fs;
use std::path::Path;

use canonical::{NormalizeConfig, Normalizer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::RenderConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TranscriptDiffConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Tokenization and equivalence settings
    #[serde(default)]
    pub normalization: NormalizeConfig,

    /// Output formatting
    #[serde(default)]
    pub render: RenderConfig,
}

impl TranscriptDiffConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: TranscriptDiffConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration.
    ///
    /// The normalization section is compiled once, so equivalence pairs whose
    /// keys come out empty are caught here rather than at diff time.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        Normalizer::new(&self.normalization)
            .map_err(|err| ConfigLoadError::Validation(format!("normalization: {err}")))?;

        for (field, marker) in [
            ("reference_marker", &self.render.reference_marker),
            ("hypothesis_marker", &self.render.hypothesis_marker),
        ] {
            if marker.is_empty() || marker.contains(['\n', '\r']) {
                return Err(ConfigLoadError::Validation(format!(
                    "render.{field} must be a non-empty single line"
                )));
            }
        }

        Ok(())
    }
}

impl Default for TranscriptDiffConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            normalization: NormalizeConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

//! Field configuration persistence
//!
//! Stores field definitions in `~/.config/masked-input/config.yaml`:
//!
//! ```yaml
//! fields:
//!   - label: price
//!     kind: currency
//!     separator: ","
//!   - label: phone
//!     kind: phoneNumber
//!     separator: "-"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::ConstructionError;
use crate::model::FormattedField;

/// One configured input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Name used to pick the field on the command line
    pub label: String,
    /// Format kind name, checked when the field is built
    pub kind: String,
    /// Group separator handed to the cursor repositioner
    pub separator: char,
}

impl FieldSpec {
    pub fn new(label: &str, kind: &str, separator: char) -> Self {
        Self {
            label: label.to_string(),
            kind: kind.to_string(),
            separator,
        }
    }

    /// Build the field, failing on an unknown kind name
    pub fn build(&self) -> Result<FormattedField, ConstructionError> {
        FormattedField::from_kind_name(&self.kind, self.separator)
    }
}

/// Input configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_fields")]
    pub fields: Vec<FieldSpec>,
}

fn default_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("price", "currency", ','),
        FieldSpec::new("phone", "phoneNumber", '-'),
    ]
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
        }
    }
}

/// Errors that can occur when reading or writing configuration
#[derive(Debug, Clone)]
pub enum ConfigError {
    NoConfigDir,
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl InputConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse config from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Find a field definition by label
    pub fn field(&self, label: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.label == label)
    }
}

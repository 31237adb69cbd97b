//! Configuration (colorlist.toml).
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [registry]
//! builtins = true
//!
//! [[registry.colors]]
//! name = "radish"
//! value = "#ff66cc"
//! ```
//!
//! A color `value` is a hex string, `[r, g, b]` or `[r, g, b, a]`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ConfigError, FormatError};
use crate::hex;
use crate::logging::LogConfig;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON lines
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LogConfig,
    pub registry: RegistryConfig,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(path.display().to_string(), e.to_string()))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            colors = config.registry.colors.len(),
            builtins = config.registry.builtins,
            "Loaded config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()?;
        self.registry.validate()
    }
}

/// How to seed a registry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Load the built-in table before `colors`
    pub builtins: bool,
    /// Extra colors, applied in order after the built-ins
    pub colors: Vec<ColorEntry>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtins: true,
            colors: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, entry) in self.colors.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "registry.colors[{index}] has an empty name"
                )));
            }
            if entry.name.starts_with('#') {
                return Err(ConfigError::ValidationError(format!(
                    "registry.colors[{index}] name {:?} would shadow hex syntax",
                    entry.name
                )));
            }
            entry.value.to_color().map_err(|e| {
                ConfigError::ValidationError(format!(
                    "registry.colors[{index}] ({}): {e}",
                    entry.name
                ))
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    pub value: ColorValue,
}

/// A color as written in config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Hex(String),
    Rgba([u8; 4]),
    Rgb([u8; 3]),
}

impl ColorValue {
    pub fn to_color(&self) -> Result<Color, FormatError> {
        match self {
            Self::Hex(s) => hex::parse_hex(s),
            Self::Rgba(channels) => Ok(Color::from(*channels)),
            Self::Rgb([r, g, b]) => Ok(Color::rgb(*r, *g, *b)),
        }
    }
}

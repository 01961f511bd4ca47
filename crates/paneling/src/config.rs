// File: src/config.rs
// Purpose: Configuration parsing from paneling.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::PanelingError;
use crate::segment::DEFAULT_SEPARATOR;
use crate::surface::PanelingType;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_PATH: &str = "paneling.toml";

/// Configuration file layout
///
/// ```toml
/// panels = ["info", "extra:"]
///
/// [paneling]
/// path = "/app"
/// max = 3
/// extras_separator = ";"
/// layout = "tiling"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub paneling: PanelingConfig,

    /// Registry keys; parametrized panels end with `:`
    #[serde(default)]
    pub panels: Vec<String>,
}

/// Static configuration of a paneling route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelingConfig {
    /// Route path the panels are mounted on (default: root)
    #[serde(default)]
    pub path: Option<String>,

    /// Maximum stack depth; absent or 0 means unlimited
    #[serde(default)]
    pub max: Option<usize>,

    /// Delimiter between name, id and extras within a segment
    #[serde(default = "default_separator")]
    pub extras_separator: char,

    /// Layout variant the panels are displayed with
    #[serde(default)]
    pub layout: PanelingType,
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl Default for PanelingConfig {
    fn default() -> Self {
        Self {
            path: None,
            max: None,
            extras_separator: default_separator(),
            layout: PanelingType::default(),
        }
    }
}

impl PanelingConfig {
    /// Depth cap with `0` normalised to unlimited
    pub fn max_depth(&self) -> Option<usize> {
        self.max.filter(|m| *m > 0)
    }

    /// Rejects separators that collide with the URL grammar
    pub fn validate(&self) -> crate::error::Result<()> {
        validate_separator(self.extras_separator)
    }
}

/// `/` splits segments and `=` splits extras, so neither can separate
pub fn validate_separator(separator: char) -> crate::error::Result<()> {
    if separator == '/' || separator == '=' || separator.is_whitespace() {
        return Err(PanelingError::InvalidSeparator(separator));
    }
    Ok(())
}

impl ConfigFile {
    /// Load configuration from paneling.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {:?}", path))
    }

    /// Load configuration from default path (./paneling.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Parses and validates a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ConfigFile = toml::from_str(content).context("Failed to parse TOML")?;
        config.paneling.validate()?;

        if let Some(bad) = config.panels.iter().find(|p| p.is_empty() || p.contains('/')) {
            return Err(PanelingError::InvalidPanelName(bad.clone()).into());
        }

        Ok(config)
    }
}

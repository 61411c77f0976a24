//! Configuration
//!
//! Settings come from built-in defaults, optionally overlaid by a JSON
//! config file, then by command line flags. Every field has a default, so a
//! config file only needs the keys it changes:
//!
//! ```json
//! {"format": "plain", "image": {"grayscale": true, "glyphs": "ascii"}}
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::ReduceMode;
use crate::error::{Error, Result};
use crate::raster::QuantizeOptions;

/// Output sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Styled text with ANSI escape sequences
    #[default]
    Ansi,
    /// Text and glyphs only
    Plain,
    /// Serialized fragments / rows
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ansi" | "color" | "colour" => Some(OutputFormat::Ansi),
            "plain" | "text" => Some(OutputFormat::Plain),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// HTTP fetch settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("termview/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Image resize request; unset sides follow the aspect ratio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Full program configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    /// Clear the screen before writing (ANSI output only)
    pub clear: bool,
    pub mode: ReduceMode,
    pub image: QuantizeOptions,
    pub resize: ResizeConfig,
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            clear: true,
            mode: ReduceMode::default(),
            image: QuantizeOptions::default(),
            resize: ResizeConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

impl Config {
    /// Parse a config from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

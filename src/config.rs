//! Settings for the command line tool.
//!
//! Settings are read from an optional JSON file. Missing fields fall back to
//! their defaults, and command line flags override whatever the file says.
//!
//! ```json
//! {
//!   "locale": "pt",
//!   "format": "markdown",
//!   "correlation": { "kinds": ["Numeric", "Boolean"], "mask_upper": true }
//! }
//! ```

use crate::error::{Result, ResultExt as _};
use crate::understanding::{CorrelationOptions, Locale};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}' (expected 'markdown' or 'json')"
            )),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    pub format: OutputFormat,
    /// Indent JSON output
    pub pretty_json: bool,
    pub correlation: CorrelationOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            format: OutputFormat::Markdown,
            pretty_json: true,
            correlation: CorrelationOptions::default(),
        }
    }
}

impl Settings {
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`](crate::error::SummaryError::Io) if the
    /// file cannot be read and `Config` if it is not valid settings JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings {}", path.display()))?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

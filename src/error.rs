//! Error handling for dataset understanding.
//!
//! Every fallible operation in the library returns [`Result<T>`], whose error
//! side is [`SummaryError`]. Errors are surfaced to the caller as-is; nothing
//! in the library logs and swallows them.
//!
//! ```
//! use crisp_dm::error::SummaryError;
//!
//! fn describe(err: &SummaryError) -> &'static str {
//!     match err {
//!         SummaryError::InvalidInput(_) => "fix the input table",
//!         SummaryError::EmptyDataset => "nothing to summarize",
//!         _ => "unexpected failure",
//!     }
//! }
//! ```
//!
//! The [`ResultExt`] trait adds `.context()` to any result whose error converts
//! into [`SummaryError`]:
//!
//! ```no_run
//! use crisp_dm::error::ResultExt as _;
//!
//! fn read_settings() -> crisp_dm::error::Result<String> {
//!     std::fs::read_to_string("settings.json").context("Failed to read settings")
//! }
//! ```

use std::fmt;

/// Main error type for dataset understanding operations.
#[derive(Debug)]
pub enum SummaryError {
    /// The input is not a well-formed table (ragged columns, wrong shape,
    /// unsupported values).
    InvalidInput(String),

    /// The dataset has no columns or no rows, so there is nothing to divide by.
    EmptyDataset,

    /// Polars failures while aggregating or loading.
    DataProcessing(String),

    /// I/O errors (reading datasets or settings)
    Io(std::io::Error),

    /// Configuration errors
    Config(String),

    /// Generic error with context
    Other(String),
}

impl SummaryError {
    /// Whether the error was caused by the caller's input rather than by the
    /// library or the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::EmptyDataset)
    }
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::EmptyDataset => write!(f, "Dataset has no columns or no rows"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SummaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SummaryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for SummaryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for SummaryError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

/// Result type alias for dataset understanding operations.
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error with `msg` prepended, keeping its variant.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Same as [`ResultExt::context`].
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<SummaryError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| wrap(msg.into(), e.into()))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap(f(), e.into()))
    }
}

// Every error keeps its variant, so a 4xx stays a 4xx after wrapping.
fn wrap(msg: String, err: SummaryError) -> SummaryError {
    match err {
        SummaryError::InvalidInput(inner) => SummaryError::InvalidInput(format!("{msg}: {inner}")),
        SummaryError::EmptyDataset => SummaryError::EmptyDataset,
        SummaryError::DataProcessing(inner) => {
            SummaryError::DataProcessing(format!("{msg}: {inner}"))
        }
        SummaryError::Io(inner) => {
            SummaryError::Io(std::io::Error::new(inner.kind(), format!("{msg}: {inner}")))
        }
        SummaryError::Config(inner) => SummaryError::Config(format!("{msg}: {inner}")),
        SummaryError::Other(inner) => SummaryError::Other(format!("{msg}: {inner}")),
    }
}

//! Presentation of metadata and correlation matrices.
//!
//! The understanding core only produces plain structures. Anything that turns
//! them into something a person reads goes through the [`Renderer`] trait, so
//! the core never depends on a display environment.
//!
//! ## Usage
//!
//! ```no_run
//! use crisp_dm::render::{MarkdownRenderer, Renderer as _};
//! use crisp_dm::understanding::{Dataset, Locale, generate_metadata};
//!
//! # fn example(dataset: &Dataset) -> crisp_dm::error::Result<()> {
//! let metadata = generate_metadata(dataset)?;
//! let markdown = MarkdownRenderer.render_metadata(&metadata, &Locale::Portuguese.labels())?;
//! std::fs::write("metadata.md", markdown)?;
//! # Ok(())
//! # }
//! ```

pub mod json;
pub mod markdown;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::understanding::{CorrelationMatrix, DatasetMetadata, Labels};

/// Turns understanding results into text.
pub trait Renderer {
    /// # Errors
    ///
    /// Fails when the output cannot be encoded.
    fn render_metadata(&self, metadata: &DatasetMetadata, labels: &Labels) -> Result<String>;

    /// # Errors
    ///
    /// Fails when the output cannot be encoded.
    fn render_correlation(&self, matrix: &CorrelationMatrix, labels: &Labels) -> Result<String>;
}

/// Picks the renderer for an output format.
pub fn renderer_for(format: OutputFormat, pretty_json: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
        OutputFormat::Json => Box::new(JsonRenderer {
            pretty: pretty_json,
        }),
    }
}

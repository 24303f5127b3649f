//! # crisp-dm - data understanding for tabular datasets
//!
//! crisp-dm answers the first questions asked of a new dataset: how many
//! values each column has, how many are missing, how many distinct values
//! there are, and which kinds of columns make up the table.
//!
//! ## Quick Start
//!
//! ```no_run
//! use crisp_dm::understanding::{Dataset, generate_metadata};
//!
//! # fn example() -> crisp_dm::error::Result<()> {
//! let dataset = Dataset::from_json_str(r#"{"a": [1, 2, null], "b": ["x", "x", "y"]}"#)?;
//! let metadata = generate_metadata(&dataset)?;
//!
//! for col in &metadata.columns {
//!     println!("{}: {} missing ({:?})", col.name, col.null, col.kind);
//! }
//! for dtype in &metadata.dtypes {
//!     println!("{}: {} columns", dtype.kind, dtype.count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`understanding`]: datasets, column metadata, dtype distribution, correlation
//! - [`render`]: Markdown and JSON presentation behind the `Renderer` trait
//! - [`http`]: status-code results for exposing the output over HTTP
//! - [`config`]: settings file for the command line tool
//! - [`error`]: error types and handling utilities
//! - [`logging`]: stderr logger setup
//!
//! Datasets are backed by Polars `DataFrame`s. Every constructor validates the
//! shape, so the statistics code never sees ragged columns.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod render;
pub mod understanding;
pub mod utils;

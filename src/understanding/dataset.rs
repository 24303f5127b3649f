//! Validated, column-oriented input tables.
//!
//! A [`Dataset`] is the only thing the summarizer accepts, and every
//! constructor checks that the columns line up. Ragged input never reaches the
//! statistics code; it is rejected here with [`SummaryError::InvalidInput`].

use crate::error::{Result, ResultExt as _, SummaryError};
use log::debug;
use polars::prelude::*;
use serde_json::Value;
use std::path::Path;

/// An in-memory table with named columns of equal length.
#[derive(Clone, Debug)]
pub struct Dataset {
    frame: DataFrame,
}

impl Dataset {
    /// Builds a dataset from columns, rejecting length mismatches and
    /// duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::InvalidInput`] naming the first column whose
    /// length differs from the first one, or when polars refuses the frame.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(SummaryError::InvalidInput(format!(
                    "column '{}' has {} values, expected {expected}",
                    bad.name(),
                    bad.len()
                )));
            }
        }

        let frame =
            DataFrame::new(columns).map_err(|e| SummaryError::InvalidInput(e.to_string()))?;
        Ok(Self { frame })
    }

    /// Same as [`Dataset::from_columns`] for plain series.
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_columns`].
    pub fn from_series(series: Vec<Series>) -> Result<Self> {
        Self::from_columns(series.into_iter().map(Column::from).collect())
    }

    /// Parses a JSON object mapping column names to arrays of scalars.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::InvalidInput`] for malformed JSON and for any
    /// table [`Dataset::from_json_value`] rejects.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| SummaryError::InvalidInput(format!("malformed JSON: {e}")))?;
        Self::from_json_value(&value)
    }

    /// Builds a dataset from `{"col": [v1, v2, ...], ...}`, keeping key order.
    ///
    /// Each column gets the narrowest type that holds all of its non-null
    /// values: booleans, 64-bit integers, floats, or strings. Columns mixing
    /// scalar kinds become strings, and all-null columns stay untyped.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::InvalidInput`] when the value is not an object
    /// of arrays, a cell holds a nested value, or the columns are ragged.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(SummaryError::InvalidInput(
                "expected a JSON object mapping column names to arrays".to_owned(),
            ));
        };

        let mut columns = Vec::with_capacity(map.len());
        for (name, values) in map {
            let Value::Array(values) = values else {
                return Err(SummaryError::InvalidInput(format!(
                    "column '{name}' is not an array"
                )));
            };
            columns.push(json_column(name, values)?);
        }

        Self::from_columns(columns)
    }

    /// Loads a dataset from disk, picking the reader from the file extension.
    ///
    /// `.json` files use the column-object layout of [`Dataset::from_json_str`];
    /// record-per-line JSON goes through `.jsonl`/`.ndjson`.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::InvalidInput`] for unsupported extensions and
    /// for files that cannot be parsed as a table, and
    /// [`SummaryError::Io`] or [`SummaryError::DataProcessing`] when the file
    /// cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        debug!("Loading dataset from {}", path.display());

        let frame = match ext.as_str() {
            "csv" => LazyCsvReader::new(path)
                .with_infer_schema_length(Some(10000))
                .with_has_header(true)
                .with_try_parse_dates(true)
                .finish()
                .and_then(LazyFrame::collect)
                .map_err(|e| reader_error("CSV", path, &e))?,
            "jsonl" | "ndjson" => JsonLineReader::from_path(path)
                .and_then(|reader| reader.finish())
                .map_err(|e| reader_error("JSON lines", path, &e))?,
            "parquet" => ParquetReader::new(std::fs::File::open(path)?)
                .finish()
                .map_err(|e| reader_error("Parquet", path, &e))?,
            "json" => {
                let content = std::fs::read_to_string(path)?;
                return Self::from_json_str(&content)
                    .with_context(|| format!("Failed to read JSON {}", path.display()));
            }
            _ => {
                return Err(SummaryError::InvalidInput(format!(
                    "Unsupported file extension: {ext}"
                )));
            }
        };

        Ok(Self { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }
}

/// A file the reader could open but not parse is malformed input; I/O
/// failures stay server-side.
fn reader_error(format: &str, path: &Path, err: &PolarsError) -> SummaryError {
    let msg = format!("Failed to read {format} {}: {err}", path.display());
    if is_io_error(err) {
        SummaryError::DataProcessing(msg)
    } else {
        SummaryError::InvalidInput(msg)
    }
}

fn is_io_error(err: &PolarsError) -> bool {
    match err {
        PolarsError::IO { .. } => true,
        PolarsError::Context { error, .. } => is_io_error(error),
        _ => false,
    }
}

fn json_column(name: &str, values: &[Value]) -> Result<Column> {
    let (mut has_bool, mut has_int, mut has_float, mut has_str) = (false, false, false, false);

    for value in values {
        match value {
            Value::Null => {}
            Value::Bool(_) => has_bool = true,
            Value::Number(n) if n.is_i64() => has_int = true,
            Value::Number(_) => has_float = true,
            Value::String(_) => has_str = true,
            Value::Array(_) | Value::Object(_) => {
                return Err(SummaryError::InvalidInput(format!(
                    "column '{name}' contains a nested value"
                )));
            }
        }
    }

    let has_number = has_int || has_float;
    let name = PlSmallStr::from(name);
    let series = match (has_bool, has_number, has_str) {
        (false, false, false) => Series::full_null(name, values.len(), &DataType::Null),
        (true, false, false) => Series::new(
            name,
            values.iter().map(Value::as_bool).collect::<Vec<_>>(),
        ),
        (false, true, false) if !has_float => Series::new(
            name,
            values.iter().map(Value::as_i64).collect::<Vec<_>>(),
        ),
        (false, true, false) => Series::new(
            name,
            values.iter().map(Value::as_f64).collect::<Vec<_>>(),
        ),
        _ => Series::new(
            name,
            values
                .iter()
                .map(|v| match v {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect::<Vec<_>>(),
        ),
    };

    Ok(Column::from(series))
}

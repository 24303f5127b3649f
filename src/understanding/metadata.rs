//! Column metadata and dtype distribution for a [`Dataset`].
//!
//! For every column this computes how many values are present, how many are
//! missing, the missing fraction, the logical type and the cardinality. The
//! columns are then grouped by logical type into a dtype distribution.
//!
//! Missing means null, or NaN in float columns.

use super::dataset::Dataset;
use super::types::{ColumnKind, ColumnMetadata, DatasetMetadata, DtypeSummary};
use crate::error::{Result, ResultExt as _, SummaryError};
use log::debug;
use polars::prelude::*;
use std::collections::HashSet;

/// Summarizes every column of `dataset`, in column order.
///
/// # Errors
///
/// Returns [`SummaryError::EmptyDataset`] when the dataset has no columns or
/// no rows. A zero-row table has no defined missing fraction, so it is
/// rejected rather than reported as NaN.
pub fn generate_metadata(dataset: &Dataset) -> Result<DatasetMetadata> {
    let frame = dataset.frame();
    let row_count = frame.height();
    let column_count = frame.width();

    if column_count == 0 || row_count == 0 {
        return Err(SummaryError::EmptyDataset);
    }

    debug!("Generating metadata for {row_count} rows and {column_count} columns");

    let columns = frame
        .get_columns()
        .iter()
        .map(|col| {
            column_metadata(col, row_count)
                .with_context(|| format!("Metadata failed for column '{}'", col.name()))
        })
        .collect::<Result<Vec<_>>>()?;
    let dtypes = summarize_dtypes(&columns);

    Ok(DatasetMetadata {
        row_count,
        column_count,
        columns,
        dtypes,
    })
}

fn column_metadata(col: &Column, row_count: usize) -> Result<ColumnMetadata> {
    let series = col.as_materialized_series();
    let kind = ColumnKind::from_dtype(series.dtype());
    let present = present_values(series)?;

    let not_null = present.len();
    let null = row_count.saturating_sub(not_null);
    let cardinality = if present.is_empty() {
        0
    } else if kind == ColumnKind::Nested {
        present
            .rechunk()
            .iter()
            .map(|v| v.to_string())
            .collect::<HashSet<_>>()
            .len()
    } else {
        present.n_unique()?
    };

    Ok(ColumnMetadata {
        name: col.name().to_string(),
        not_null,
        null,
        null_fraction: if row_count == 0 {
            0.0
        } else {
            null as f64 / row_count as f64
        },
        kind,
        storage_type: series.dtype().to_string(),
        cardinality,
    })
}

/// The non-missing values of a series.
fn present_values(series: &Series) -> Result<Series> {
    let non_null = series.drop_nulls();
    if non_null.dtype().is_float() {
        let mask = non_null.is_not_nan()?;
        Ok(non_null.filter(&mask)?)
    } else {
        Ok(non_null)
    }
}

/// Groups columns by kind, most common first.
///
/// The sort is stable, so kinds with equal counts keep the order in which
/// they first appear among the columns.
pub fn summarize_dtypes(columns: &[ColumnMetadata]) -> Vec<DtypeSummary> {
    let mut counts: Vec<(ColumnKind, usize)> = Vec::new();
    for column in columns {
        match counts.iter_mut().find(|(kind, _)| *kind == column.kind) {
            Some((_, count)) => *count += 1,
            None => counts.push((column.kind, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(kind, count)| DtypeSummary {
            kind,
            count,
            fraction: round_fraction(count, columns.len()),
        })
        .collect()
}

/// `numerator / denominator` rounded half-up to two decimals.
///
/// Rounding happens on the exact ratio in integer arithmetic, so ties such as
/// 1/8 = 0.125 always go up to 0.13 regardless of float representation.
pub fn round_fraction(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    let hundredths = (200 * numerator + denominator) / (2 * denominator);
    hundredths as f64 / 100.0
}

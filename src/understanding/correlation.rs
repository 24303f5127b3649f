use super::dataset::Dataset;
use super::types::{ColumnKind, CorrelationMatrix};
use crate::error::{Result, ResultExt as _};
use log::debug;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Which columns take part in the correlation matrix, and how it is masked.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CorrelationOptions {
    pub kinds: Vec<ColumnKind>,
    /// Blank out the diagonal and everything above it; each pair then appears
    /// exactly once.
    pub mask_upper: bool,
}

impl Default for CorrelationOptions {
    fn default() -> Self {
        Self {
            kinds: vec![ColumnKind::Numeric],
            mask_upper: true,
        }
    }
}

/// Pairwise Pearson correlations between the columns whose kind is listed in
/// `options.kinds`, in column order.
///
/// # Errors
///
/// Returns [`SummaryError::DataProcessing`](crate::error::SummaryError) when a
/// selected column cannot be cast to `f64`.
pub fn correlation_matrix(
    dataset: &Dataset,
    options: &CorrelationOptions,
) -> Result<CorrelationMatrix> {
    let mut columns = Vec::new();
    let mut data = Vec::new();

    for col in dataset.frame().get_columns() {
        if !options.kinds.contains(&ColumnKind::from_dtype(col.dtype())) {
            continue;
        }
        let values = float_values(col)
            .with_context(|| format!("Column '{}' cannot be correlated", col.name()))?;
        columns.push(col.name().to_string());
        data.push(values);
    }

    debug!("Correlating {} columns", columns.len());

    let mut values = vec![vec![None; columns.len()]; columns.len()];
    for (i, (row, xs)) in values.iter_mut().zip(&data).enumerate() {
        for (j, (cell, ys)) in row.iter_mut().zip(&data).enumerate() {
            if options.mask_upper && j >= i {
                continue;
            }
            *cell = pearson(xs, ys)?;
        }
    }

    Ok(CorrelationMatrix { columns, values })
}

fn float_values(col: &Column) -> Result<Float64Chunked> {
    let series = col.as_materialized_series().cast(&DataType::Float64)?;
    Ok(series.f64()?.clone())
}

/// Pearson correlation over the rows where both values are present.
///
/// Null and NaN on either side drop the row. Returns `None` with fewer than
/// two complete pairs or when either side has zero variance.
///
/// # Errors
///
/// Fails when the two columns differ in length.
pub fn pearson(xs: &Float64Chunked, ys: &Float64Chunked) -> Result<Option<f64>> {
    let not_null = &xs.is_not_null() & &ys.is_not_null();
    let not_nan = &xs.is_not_nan() & &ys.is_not_nan();
    let present = &not_null & &not_nan;
    let xs = xs.filter(&present)?;
    let ys = ys.filter(&present)?;
    if xs.len() < 2 {
        return Ok(None);
    }

    Ok(polars::prelude::cov::pearson_corr(&xs, &ys)
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(-1.0, 1.0)))
}

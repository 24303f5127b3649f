use polars::prelude::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical type of a column, derived from its storage type.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Numeric,
    Text,
    Boolean,
    Categorical,
    Temporal,
    Nested,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Text => "Text",
            Self::Boolean => "Boolean",
            Self::Categorical => "Categorical",
            Self::Temporal => "Temporal",
            Self::Nested => "Nested",
        }
    }

    /// Untyped (all-null) columns count as text, the same bucket as any
    /// other column without a more specific type.
    pub fn from_dtype(dtype: &DataType) -> Self {
        if dtype.is_bool() {
            Self::Boolean
        } else if dtype.is_primitive_numeric() || matches!(dtype, DataType::Decimal(..)) {
            Self::Numeric
        } else if dtype.is_temporal() {
            Self::Temporal
        } else if matches!(dtype, DataType::Categorical(..) | DataType::Enum(..)) {
            Self::Categorical
        } else if dtype.is_nested() {
            Self::Nested
        } else {
            Self::Text
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-column statistics, one row per input column.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ColumnMetadata {
    pub name: String,
    pub not_null: usize,
    pub null: usize,
    /// `null / rows`, always within `[0, 1]`.
    pub null_fraction: f64,
    pub kind: ColumnKind,
    /// Concrete storage type as polars prints it, e.g. `i64` or `str`.
    pub storage_type: String,
    pub cardinality: usize,
}

/// One row per distinct [`ColumnKind`] present in the dataset.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DtypeSummary {
    pub kind: ColumnKind,
    pub count: usize,
    /// Share of all columns, rounded half-up to two decimals.
    pub fraction: f64,
}

/// Result of summarizing a dataset.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DatasetMetadata {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnMetadata>,
    pub dtypes: Vec<DtypeSummary>,
}

impl DatasetMetadata {
    pub fn column(&self, name: &str) -> Option<&ColumnMetadata> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|c| c.null).sum()
    }
}

/// Pairwise Pearson correlations between the selected columns.
///
/// `values[i][j]` is `None` when the cell is masked or the correlation is
/// undefined (fewer than two paired observations, or zero variance).
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == row)?;
        let j = self.columns.iter().position(|c| c == col)?;
        self.values.get(i)?.get(j).copied().flatten()
    }
}

//! Localized output labels.
//!
//! The same metadata can be presented in English or Portuguese; only the
//! headers, titles and the shape sentence change.

use super::types::{ColumnKind, DatasetMetadata};
use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "pt", alias = "pt-br")]
    Portuguese,
}

impl Locale {
    pub fn labels(self) -> Labels {
        match self {
            Self::English => Labels::ENGLISH,
            Self::Portuguese => Labels::PORTUGUESE,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "pt" | "pt-br" | "portuguese" => Ok(Self::Portuguese),
            other => Err(format!("unknown locale '{other}' (expected 'en' or 'pt')")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    pub column: &'static str,
    pub not_null: &'static str,
    pub null: &'static str,
    pub null_fraction: &'static str,
    pub dtype: &'static str,
    pub cardinality: &'static str,
    pub count: &'static str,
    pub fraction: &'static str,
    pub dataset_title: &'static str,
    pub dtypes_title: &'static str,
    pub correlation_title: &'static str,
    locale: Locale,
}

impl Labels {
    pub const ENGLISH: Self = Self {
        column: "Column",
        not_null: "Not Null",
        null: "Null",
        null_fraction: "Perce Null",
        dtype: "Dtype",
        cardinality: "Cardinality",
        count: "Count",
        fraction: "Percentage",
        dataset_title: "Dataset Information",
        dtypes_title: "Data Types Information:",
        correlation_title: "Heatmap Correlation",
        locale: Locale::English,
    };

    pub const PORTUGUESE: Self = Self {
        column: "Coluna",
        not_null: "Não Nulos",
        null: "Nulos",
        null_fraction: "Perce Nulos",
        dtype: "Dtype",
        cardinality: "Cardinalidade",
        count: "Contagem",
        fraction: "Percentual",
        dataset_title: "Informações sobre o Dataset",
        dtypes_title: "Informações sobre os Tipos de Dados:",
        correlation_title: "Correlação",
        locale: Locale::Portuguese,
    };

    pub fn shape_sentence(&self, rows: usize, columns: usize) -> String {
        match self.locale {
            Locale::English => format!(
                "The dataset has {rows} rows and {columns} columns. Of these, we have:"
            ),
            Locale::Portuguese => format!(
                "O dataset possui {rows} linhas e {columns} colunas. Dessas, temos:"
            ),
        }
    }

    pub fn kind(&self, kind: ColumnKind) -> &'static str {
        match self.locale {
            Locale::English => kind.as_str(),
            Locale::Portuguese => match kind {
                ColumnKind::Numeric => "Numérico",
                ColumnKind::Text => "Texto",
                ColumnKind::Boolean => "Booleano",
                ColumnKind::Categorical => "Categórico",
                ColumnKind::Temporal => "Temporal",
                ColumnKind::Nested => "Aninhado",
            },
        }
    }
}

impl DatasetMetadata {
    /// Exports the column table and the dtype table as polars frames with
    /// localized headers.
    ///
    /// # Errors
    ///
    /// Fails if polars rejects the frames, which only happens when two labels
    /// of the same table collide.
    pub fn to_frames(&self, labels: &Labels) -> Result<(DataFrame, DataFrame)> {
        let cols = &self.columns;
        let info = DataFrame::new(vec![
            text_column(labels.column, cols.iter().map(|c| c.name.as_str())),
            count_column(labels.not_null, cols.iter().map(|c| c.not_null)),
            count_column(labels.null, cols.iter().map(|c| c.null)),
            Column::from(Series::new(
                labels.null_fraction.into(),
                cols.iter().map(|c| c.null_fraction).collect::<Vec<_>>(),
            )),
            text_column(labels.dtype, cols.iter().map(|c| labels.kind(c.kind))),
            count_column(labels.cardinality, cols.iter().map(|c| c.cardinality)),
        ])?;

        let dtypes = DataFrame::new(vec![
            text_column(labels.dtype, self.dtypes.iter().map(|d| labels.kind(d.kind))),
            count_column(labels.count, self.dtypes.iter().map(|d| d.count)),
            Column::from(Series::new(
                labels.fraction.into(),
                self.dtypes.iter().map(|d| d.fraction).collect::<Vec<_>>(),
            )),
        ])?;

        Ok((info, dtypes))
    }
}

fn text_column<'a>(name: &str, values: impl Iterator<Item = &'a str>) -> Column {
    Column::from(Series::new(name.into(), values.collect::<Vec<_>>()))
}

fn count_column(name: &str, values: impl Iterator<Item = usize>) -> Column {
    Column::from(Series::new(
        name.into(),
        values.map(|v| v as u64).collect::<Vec<_>>(),
    ))
}

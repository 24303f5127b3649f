//! Markdown tables for metadata and correlation matrices.

use super::Renderer;
use crate::error::Result;
use crate::understanding::{CorrelationMatrix, DatasetMetadata, Labels};
use crate::utils::{fmt_opt, fmt_pct};

#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render_metadata(&self, metadata: &DatasetMetadata, labels: &Labels) -> Result<String> {
        let mut md = String::new();

        md.push_str(&format!("### {}\n\n", labels.dataset_title));
        md.push_str(&format!(
            "##### {}\n\n",
            labels.shape_sentence(metadata.row_count, metadata.column_count)
        ));
        render_column_table(&mut md, metadata, labels);

        md.push_str(&format!("\n### {}\n\n", labels.dtypes_title));
        render_dtype_table(&mut md, metadata, labels);

        Ok(md)
    }

    fn render_correlation(&self, matrix: &CorrelationMatrix, labels: &Labels) -> Result<String> {
        let mut md = format!("### {}\n\n", labels.correlation_title);

        if matrix.is_empty() {
            md.push_str("*No columns to correlate.*\n");
            return Ok(md);
        }

        md.push_str("|  |");
        for name in &matrix.columns {
            md.push_str(&format!(" {} |", escape_cell(name)));
        }
        md.push('\n');
        md.push_str(&"|---".repeat(matrix.columns.len() + 1));
        md.push_str("|\n");

        for (name, row) in matrix.columns.iter().zip(&matrix.values) {
            md.push_str(&format!("| **{}** |", escape_cell(name)));
            for cell in row {
                md.push_str(&format!(" {} |", fmt_opt(*cell, 2)));
            }
            md.push('\n');
        }

        Ok(md)
    }
}

fn render_column_table(md: &mut String, metadata: &DatasetMetadata, labels: &Labels) {
    md.push_str(&format!(
        "| {} | {} | {} | {} | {} | {} |\n",
        labels.column,
        labels.not_null,
        labels.null,
        labels.null_fraction,
        labels.dtype,
        labels.cardinality
    ));
    md.push_str("|---|---:|---:|---:|---|---:|\n");

    for col in &metadata.columns {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            escape_cell(&col.name),
            col.not_null,
            col.null,
            fmt_pct(col.null_fraction),
            labels.kind(col.kind),
            col.cardinality
        ));
    }
}

fn render_dtype_table(md: &mut String, metadata: &DatasetMetadata, labels: &Labels) {
    md.push_str(&format!(
        "| {} | {} | {} |\n",
        labels.dtype, labels.count, labels.fraction
    ));
    md.push_str("|---|---:|---:|\n");

    for dtype in &metadata.dtypes {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            labels.kind(dtype.kind),
            dtype.count,
            fmt_pct(dtype.fraction)
        ));
    }
}

// Column names come from user data and must not open a new cell or row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, clippy::indexing_slicing)]
    use super::*;
    use crate::understanding::{ColumnKind, ColumnMetadata, DtypeSummary, Locale};

    fn sample_metadata() -> DatasetMetadata {
        DatasetMetadata {
            row_count: 3,
            column_count: 2,
            columns: vec![
                ColumnMetadata {
                    name: "a".to_owned(),
                    not_null: 2,
                    null: 1,
                    null_fraction: 1.0 / 3.0,
                    kind: ColumnKind::Numeric,
                    storage_type: "i64".to_owned(),
                    cardinality: 2,
                },
                ColumnMetadata {
                    name: "b".to_owned(),
                    not_null: 3,
                    null: 0,
                    null_fraction: 0.0,
                    kind: ColumnKind::Text,
                    storage_type: "str".to_owned(),
                    cardinality: 2,
                },
            ],
            dtypes: vec![
                DtypeSummary {
                    kind: ColumnKind::Numeric,
                    count: 1,
                    fraction: 0.5,
                },
                DtypeSummary {
                    kind: ColumnKind::Text,
                    count: 1,
                    fraction: 0.5,
                },
            ],
        }
    }

    #[test]
    fn test_render_metadata_english() {
        let md = MarkdownRenderer
            .render_metadata(&sample_metadata(), &Labels::ENGLISH)
            .unwrap();

        assert!(md.contains("### Dataset Information"));
        assert!(md.contains("The dataset has 3 rows and 2 columns. Of these, we have:"));
        assert!(md.contains("| a | 2 | 1 | 33.33% | Numeric | 2 |"));
        assert!(md.contains("| b | 3 | 0 | 0.00% | Text | 2 |"));
        assert!(md.contains("### Data Types Information:"));
        assert!(md.contains("| Numeric | 1 | 50.00% |"));
    }

    #[test]
    fn test_render_metadata_portuguese() {
        let md = MarkdownRenderer
            .render_metadata(&sample_metadata(), &Locale::Portuguese.labels())
            .unwrap();

        assert!(md.contains("### Informações sobre o Dataset"));
        assert!(md.contains("O dataset possui 3 linhas e 2 colunas."));
        assert!(md.contains("| Dtype | Contagem | Percentual |"));
        assert!(md.contains("| Texto | 1 | 50.00% |"));
    }

    #[test]
    fn test_render_correlation_blanks_masked_cells() {
        let matrix = CorrelationMatrix {
            columns: vec!["x".to_owned(), "y".to_owned()],
            values: vec![vec![None, None], vec![Some(-0.5), None]],
        };
        let md = MarkdownRenderer
            .render_correlation(&matrix, &Labels::ENGLISH)
            .unwrap();

        assert!(md.contains("### Heatmap Correlation"));
        assert!(md.contains("|  | x | y |"));
        assert!(md.contains("| **x** |  |  |"));
        assert!(md.contains("| **y** | -0.50 |  |"));
    }

    #[test]
    fn test_render_escapes_pipes_in_names() {
        let mut metadata = sample_metadata();
        metadata.columns[0].name = "a|b\nc".to_owned();
        let md = MarkdownRenderer
            .render_metadata(&metadata, &Labels::ENGLISH)
            .unwrap();
        assert!(md.contains("| a\\|b c | 2 | 1 | 33.33% | Numeric | 2 |"), "{md}");

        let matrix = CorrelationMatrix {
            columns: vec!["p|q".to_owned()],
            values: vec![vec![None]],
        };
        let md = MarkdownRenderer
            .render_correlation(&matrix, &Labels::ENGLISH)
            .unwrap();
        assert!(md.contains("|  | p\\|q |"), "{md}");
        assert!(md.contains("| **p\\|q** |  |"), "{md}");
    }

    #[test]
    fn test_render_empty_correlation() {
        let matrix = CorrelationMatrix {
            columns: vec![],
            values: vec![],
        };
        let md = MarkdownRenderer
            .render_correlation(&matrix, &Labels::ENGLISH)
            .unwrap();
        assert!(md.contains("No columns to correlate"));
    }
}

//! Integration tests for the full understanding workflow
//!
//! These tests load fixture files from `testdata/`, summarize them and render
//! the result the way the command line tool does.

#![expect(clippy::unwrap_used)]

use crisp_dm::error::SummaryError;
use crisp_dm::render::{JsonRenderer, MarkdownRenderer, Renderer as _};
use crisp_dm::understanding::{
    ColumnKind, CorrelationOptions, Dataset, Locale, correlation_matrix, generate_metadata,
};
use polars::prelude::{Column, DataFrame, NamedFrom as _, ParquetWriter, Series};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

#[test]
fn test_summarize_clean_csv() {
    let dataset = Dataset::load(&fixture("clean.csv")).unwrap();
    let meta = generate_metadata(&dataset).unwrap();

    assert_eq!(meta.row_count, 10, "Should have 10 rows");
    assert_eq!(meta.column_count, 6, "Should have 6 columns");
    assert_eq!(meta.total_nulls(), 0, "Clean file has no missing values");

    let names: Vec<&str> = meta.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "name", "age", "salary", "department", "active"]
    );

    assert_eq!(meta.column("id").unwrap().cardinality, 10);
    assert_eq!(meta.column("department").unwrap().cardinality, 3);
    assert_eq!(meta.column("active").unwrap().kind, ColumnKind::Boolean);

    let kinds: Vec<(ColumnKind, usize)> = meta.dtypes.iter().map(|d| (d.kind, d.count)).collect();
    assert_eq!(
        kinds,
        vec![
            (ColumnKind::Numeric, 3),
            (ColumnKind::Text, 2),
            (ColumnKind::Boolean, 1)
        ]
    );
    let fractions: Vec<f64> = meta.dtypes.iter().map(|d| d.fraction).collect();
    assert_eq!(fractions, vec![0.5, 0.33, 0.17]);
}

#[test]
fn test_summarize_missing_values_csv() {
    let dataset = Dataset::load(&fixture("missing_values.csv")).unwrap();
    let meta = generate_metadata(&dataset).unwrap();

    assert_eq!(meta.row_count, 5);

    let city = meta.column("city").unwrap();
    assert_eq!(city.null, 2);
    assert_eq!(city.cardinality, 2);
    assert!((city.null_fraction - 0.4).abs() < 1e-9);

    let score = meta.column("score").unwrap();
    assert_eq!(score.null, 2);
    assert_eq!(score.kind, ColumnKind::Numeric);

    let notes = meta.column("notes").unwrap();
    assert_eq!(notes.not_null, 0);
    assert_eq!(notes.cardinality, 0);
    assert!((notes.null_fraction - 1.0).abs() < 1e-9);

    for col in &meta.columns {
        assert_eq!(col.not_null + col.null, meta.row_count);
    }
}

#[test]
fn test_summarize_json_columns_and_render() {
    let dataset = Dataset::load(&fixture("columns.json")).unwrap();
    let meta = generate_metadata(&dataset).unwrap();

    let md = MarkdownRenderer
        .render_metadata(&meta, &Locale::English.labels())
        .unwrap();
    assert!(md.contains("The dataset has 3 rows and 2 columns."));
    assert!(md.contains("| a | 2 | 1 | 33.33% | Numeric | 2 |"));
    assert!(md.contains("| b | 3 | 0 | 0.00% | Text | 2 |"));

    let json = JsonRenderer::default()
        .render_metadata(&meta, &Locale::Portuguese.labels())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value.pointer("/metadata/columns/0/not_null"),
        Some(&serde_json::json!(2))
    );
    assert_eq!(
        value.pointer("/metadata/dtypes/0/fraction"),
        Some(&serde_json::json!(0.5))
    );
}

#[test]
fn test_ragged_json_is_invalid_input() {
    let result = Dataset::load(&fixture("ragged.json"));
    assert!(
        matches!(result, Err(SummaryError::InvalidInput(_))),
        "Ragged columns should be rejected"
    );
}

#[test]
fn test_ragged_csv_is_invalid_input() {
    let result = Dataset::load(&fixture("ragged.csv"));
    assert!(
        matches!(result, Err(SummaryError::InvalidInput(_))),
        "A row with extra fields should be rejected: {result:?}"
    );
}

#[test]
fn test_summarize_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.jsonl");
    std::fs::write(
        &path,
        "{\"city\": \"Recife\", \"score\": 1.5}\n\
         {\"city\": null, \"score\": 2.5}\n\
         {\"city\": \"Recife\", \"score\": null}\n",
    )
    .unwrap();

    let meta = generate_metadata(&Dataset::load(&path).unwrap()).unwrap();
    assert_eq!(meta.row_count, 3);

    let city = meta.column("city").unwrap();
    assert_eq!((city.not_null, city.null, city.cardinality), (2, 1, 1));
    assert_eq!(city.kind, ColumnKind::Text);

    let score = meta.column("score").unwrap();
    assert_eq!((score.not_null, score.null), (2, 1));
    assert_eq!(score.kind, ColumnKind::Numeric);
}

#[test]
fn test_summarize_parquet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.parquet");

    let mut df = DataFrame::new(vec![
        Column::from(Series::new("id".into(), vec![1i64, 2, 3, 4])),
        Column::from(Series::new(
            "label".into(),
            vec![Some("a"), None, Some("b"), Some("a")],
        )),
    ])
    .unwrap();
    let file = std::fs::File::create(&path).unwrap();
    ParquetWriter::new(file).finish(&mut df).unwrap();

    let dataset = Dataset::load(&path).unwrap();
    let names: Vec<&str> = dataset
        .frame()
        .get_column_names()
        .into_iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(names, vec!["id", "label"]);

    let meta = generate_metadata(&dataset).unwrap();
    let label = meta.column("label").unwrap();
    assert_eq!((label.not_null, label.null, label.cardinality), (3, 1, 2));
    assert_eq!(meta.column("id").unwrap().storage_type, "i64");
}

#[test]
fn test_unsupported_extension() {
    let result = Dataset::load(&fixture("data.xlsx"));
    assert!(matches!(result, Err(SummaryError::InvalidInput(_))));
}

#[test]
fn test_correlate_clean_csv() {
    let dataset = Dataset::load(&fixture("clean.csv")).unwrap();
    let matrix = correlation_matrix(&dataset, &CorrelationOptions::default()).unwrap();

    assert_eq!(matrix.columns, vec!["id", "age", "salary"]);
    let age_salary = matrix.get("salary", "age").unwrap();
    assert!(age_salary > 0.9, "age and salary move together ({age_salary})");
    assert_eq!(matrix.get("age", "salary"), None);
}

//! CSV ingest and validation.
//!
//! This module turns an advertising CSV into a `Dataset` that is safe to fit.
//!
//! Design goals:
//! - **Strict schema** for the four required columns (clear errors + exit code 2)
//! - **Strict values**: every required cell must be a finite number; the first
//!   bad cell fails the load with its line number
//! - **Separation of concerns**: no fitting logic here

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::domain::{Dataset, Observation, PREDICTORS, RESPONSE};

#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: `{0}`")]
    MissingColumn(&'static str),
    #[error("line {line}: missing value for `{column}`")]
    MissingValue { line: usize, column: &'static str },
    #[error("line {line}: invalid value '{value}' for `{column}` (expected a finite number)")]
    InvalidValue {
        line: usize,
        column: &'static str,
        value: String,
    },
    #[error("no data rows")]
    Empty,
}

/// Column positions of the required fields in the header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    tv: usize,
    radio: usize,
    newspaper: usize,
    sales: usize,
}

/// Load the dataset from a CSV file.
pub fn load_dataset(path: &Path) -> Result<Dataset, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_dataset_from_reader(file, path.display().to_string())
}

/// Load the dataset from any reader (used by tests and by `load_dataset`).
pub fn load_dataset_from_reader<R: Read>(
    reader: R,
    source: impl Into<String>,
) -> Result<Dataset, DataLoadError> {
    let source = source.into();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&build_header_map(&headers))?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header and CSV lines are 1-based.
        let line = idx + 2;
        let record = result?;
        rows.push(parse_row(&record, columns, line)?);
    }

    if rows.is_empty() {
        return Err(DataLoadError::Empty);
    }

    log::debug!("loaded {} rows from {source}", rows.len());
    Ok(Dataset::new(source, rows))
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn resolve_columns(header_map: &HashMap<String, usize>) -> Result<ColumnIndex, DataLoadError> {
    let find = |name: &'static str| {
        header_map
            .get(&name.to_ascii_lowercase())
            .copied()
            .ok_or(DataLoadError::MissingColumn(name))
    };

    Ok(ColumnIndex {
        tv: find(PREDICTORS[0])?,
        radio: find(PREDICTORS[1])?,
        newspaper: find(PREDICTORS[2])?,
        sales: find(RESPONSE)?,
    })
}

fn parse_row(record: &StringRecord, columns: ColumnIndex, line: usize) -> Result<Observation, DataLoadError> {
    Ok(Observation {
        tv: parse_cell(record, columns.tv, PREDICTORS[0], line)?,
        radio: parse_cell(record, columns.radio, PREDICTORS[1], line)?,
        newspaper: parse_cell(record, columns.newspaper, PREDICTORS[2], line)?,
        sales: parse_cell(record, columns.sales, RESPONSE, line)?,
    })
}

fn parse_cell(record: &StringRecord, idx: usize, column: &'static str, line: usize) -> Result<f64, DataLoadError> {
    let raw = record
        .get(idx)
        .filter(|s| !s.is_empty())
        .ok_or(DataLoadError::MissingValue { line, column })?;

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataLoadError::InvalidValue {
            line,
            column,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Result<Dataset, DataLoadError> {
        load_dataset_from_reader(text.as_bytes(), "inline")
    }

    #[test]
    fn loads_rows_in_file_order() {
        let data = load("TV,radio,newspaper,sales\n230.1,37.8,69.2,22.1\n44.5,39.3,45.1,10.4\n").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.rows()[0], Observation::new(230.1, 37.8, 69.2, 22.1));
        assert_eq!(data.rows()[1], Observation::new(44.5, 39.3, 45.1, 10.4));
        assert_eq!(data.source, "inline");
    }

    #[test]
    fn ignores_index_column_and_reorders_by_header() {
        let data = load("\u{feff},sales,newspaper,radio,tv\n1,22.1,69.2,37.8,230.1\n").unwrap();
        assert_eq!(data.rows()[0], Observation::new(230.1, 37.8, 69.2, 22.1));
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let err = load("TV,radio,sales\n1,2,3\n").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("newspaper")));
    }

    #[test]
    fn bad_cell_reports_line_and_column() {
        let err = load("TV,radio,newspaper,sales\n1,2,3,4\n5,x,7,8\n").unwrap_err();
        match err {
            DataLoadError::InvalidValue { line, column, value } => {
                assert_eq!(line, 3);
                assert_eq!(column, "radio");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_and_non_finite_cells_are_rejected() {
        let err = load("TV,radio,newspaper,sales\n1,2,,4\n").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingValue { line: 2, column: "newspaper" }));

        let err = load("TV,radio,newspaper,sales\n1,2,3,NaN\n").unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidValue { column: "sales", .. }));
    }

    #[test]
    fn header_only_file_is_empty() {
        let err = load("TV,radio,newspaper,sales\n").unwrap_err();
        assert!(matches!(err, DataLoadError::Empty));
    }

    #[test]
    fn missing_file_fails_to_open() {
        let path = std::env::temp_dir().join("ad-ols-definitely-missing.csv");
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Open { .. }));
    }
}

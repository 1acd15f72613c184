use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataSourceError>;

/// Fatal problems with the raw daily/hourly sources.
///
/// Any of these stops the dashboard at startup; nothing can be shown
/// without both prepared tables.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is missing expected column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("row {row}: code {code} in column '{column}' has no label")]
    UnmappedCode {
        column: &'static str,
        code: i64,
        row: usize,
    },

    #[error("row {row}: no value in column '{column}'")]
    MissingValue { column: &'static str, row: usize },

    #[error("row {row}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { value: String, row: usize },

    #[error("row {row}: rental count is negative")]
    NegativeCount { row: usize },

    #[error("row {row}: rental count {value} is out of range")]
    CountOutOfRange { value: i64, row: usize },

    #[error("row {row}: value in column '{column}' is not a finite number")]
    NonFiniteValue { column: &'static str, row: usize },
}

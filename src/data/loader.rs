use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::schema::{semantic_name, HOURLY_COLUMNS, SHARED_COLUMNS};
use crate::error::{DataSourceError, Result};

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// Which of the two sources a table was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Daily,
    Hourly,
}

impl TableKind {
    /// Raw columns that must be present in the header row.
    pub fn required_columns(self) -> impl Iterator<Item = &'static str> {
        let extra: &'static [&'static str] = match self {
            TableKind::Daily => &[],
            TableKind::Hourly => HOURLY_COLUMNS,
        };
        SHARED_COLUMNS.iter().chain(extra).copied()
    }
}

/// One CSV row after header renaming, before any type coercion.
///
/// Field names are the semantic names from [`super::schema::COLUMN_RENAMES`];
/// columns without a semantic name (`instant`, `workingday`) are not read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub date: String,
    pub season: i64,
    pub year: i64,
    pub month: i64,
    #[serde(default)]
    pub hour: Option<i64>,
    pub holiday: i64,
    pub day_of_week: i64,
    pub weather_situation: i64,
    pub temperature: f64,
    pub feeling_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub casual_rentals: i64,
    pub registered_rentals: i64,
    pub total_rentals: i64,
}

/// A whole raw source file.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub kind: TableKind,
    pub path: PathBuf,
    pub rows: Vec<RawRecord>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a raw source file from disk.
pub fn load_table(path: &Path, kind: TableKind) -> Result<RawTable> {
    let file = File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_table(file, path, kind)?;
    log::info!(
        "Loaded {} {:?} rows from {}",
        table.rows.len(),
        table.kind,
        table.path.display()
    );
    Ok(table)
}

/// Parse CSV text from any reader. `path` only labels errors.
///
/// The header row is checked for every required column, then renamed to
/// semantic names so rows deserialize straight into [`RawRecord`].
pub fn read_table<R: Read>(input: R, path: &Path, kind: TableKind) -> Result<RawTable> {
    let csv_error = |source: csv::Error| DataSourceError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let headers = reader.headers().map_err(csv_error)?.clone();

    for column in kind.required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(DataSourceError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let renamed: csv::StringRecord = headers
        .iter()
        .map(|h| semantic_name(h).unwrap_or(h))
        .collect();
    reader.set_headers(renamed);

    let rows = reader
        .deserialize::<RawRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(csv_error)?;

    Ok(RawTable {
        kind,
        path: path.to_path_buf(),
        rows,
    })
}

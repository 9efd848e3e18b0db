//! Error types for dataset loading.

use std::path::PathBuf;

use folio_core::CoreError;
use thiserror::Error;

/// Result type for dataset loading.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading an asset dataset.
///
/// Line numbers are 1-based and refer to the source text.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text.
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    /// No header row, or a header without year columns.
    #[error("dataset has no year header")]
    MissingHeader,

    /// A header cell is not a year.
    #[error("header column {column}: '{value}' is not a year")]
    InvalidYear {
        /// 1-based column.
        column: usize,
        /// Cell text.
        value: String,
    },

    /// Header years are not consecutive.
    #[error("header column {column}: expected year {expected}, found {found}")]
    YearSequence {
        /// 1-based column.
        column: usize,
        /// Year that should have appeared.
        expected: i32,
        /// Year that did appear.
        found: i32,
    },

    /// An asset row has no name.
    #[error("line {line}: missing asset name")]
    MissingName {
        /// Line of the row.
        line: u64,
    },

    /// An asset row has no symbol.
    #[error("line {line}: missing symbol for {name}")]
    MissingSymbol {
        /// Line of the row.
        line: u64,
        /// Asset name.
        name: String,
    },

    /// A return cell is not a number.
    #[error("line {line}: {name} {year}: '{value}' is not a number")]
    InvalidReturn {
        /// Line of the row.
        line: u64,
        /// Asset name.
        name: String,
        /// Year of the cell.
        year: i32,
        /// Cell text.
        value: String,
    },

    /// A row has more values than the header has years.
    #[error("line {line}: {name} has {cells} values for {years} years")]
    TooManyValues {
        /// Line of the row.
        line: u64,
        /// Asset name.
        name: String,
        /// Number of value cells.
        cells: usize,
        /// Number of header years.
        years: usize,
    },

    /// An empty cell inside an asset's history.
    #[error("line {line}: {name} has no return for {year}")]
    InteriorGap {
        /// Line of the row.
        line: u64,
        /// Asset name.
        name: String,
        /// Year of the empty cell.
        year: i32,
    },

    /// An asset row with no values.
    #[error("line {line}: {name} has no returns")]
    EmptyHistory {
        /// Line of the row.
        line: u64,
        /// Asset name.
        name: String,
    },

    /// History shorter than required.
    #[error("{name}: {years} years of history, need at least {required}")]
    InsufficientYears {
        /// Asset name.
        name: String,
        /// Years present.
        years: usize,
        /// Years required.
        required: usize,
    },

    /// History does not run to the dataset's last year.
    #[error("{name}: history ends in {last_year}, dataset ends in {expected}")]
    LastYearMismatch {
        /// Asset name.
        name: String,
        /// The asset's last year.
        last_year: i32,
        /// The header's last year.
        expected: i32,
    },

    /// Asset construction or registry build failed (e.g. duplicate name).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FileError {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

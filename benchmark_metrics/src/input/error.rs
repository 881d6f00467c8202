//!
//! Benchmark input errors.
//!

use std::path::PathBuf;

use crate::input::column::Column;

///
/// Benchmark table loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
    /// Malformed CSV framing, e.g. a row with a wrong number of cells.
    #[error("Parsing input file {path:?}: {error}")]
    Csv {
        /// The underlying CSV error.
        error: csv::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Required columns are absent from the header.
    #[error("Input file {path:?} is missing required column(s): {}", .missing.join(", "))]
    Schema {
        /// The path to the input file.
        path: PathBuf,
        /// Names of the absent columns.
        missing: Vec<String>,
    },
    /// A cell cannot be converted to its column type.
    #[error("Input file {path:?}, line {line}: {column} value `{value}` is invalid: {reason}")]
    Parsing {
        /// The path to the input file.
        path: PathBuf,
        /// The line of the offending row.
        line: u64,
        /// The offending column.
        column: Column,
        /// The cell text.
        value: String,
        /// The conversion failure.
        reason: String,
    },
    /// A value violates a domain invariant.
    #[error("Input file {path:?}, line {line}: {reason}")]
    Validation {
        /// The path to the input file.
        path: PathBuf,
        /// The line of the offending row.
        line: u64,
        /// The violated invariant.
        reason: String,
    },
}

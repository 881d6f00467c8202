//!
//! Benchmark table input.
//!

pub mod column;
pub mod error;
pub mod layout;
pub mod source;

use std::path::Path;

use crate::model::record::BenchmarkRecord;

use self::error::Error as InputError;
use self::layout::Layout;
use self::source::Source;

///
/// Loads the records of a benchmark table file.
///
/// The source's device label is attached to every record.
///
pub fn load(source: &Source) -> Result<Vec<BenchmarkRecord>, InputError> {
    let text =
        std::fs::read_to_string(source.path.as_path()).map_err(|error| InputError::Reading {
            error,
            path: source.path.clone(),
        })?;
    parse(text.as_str(), source)
}

///
/// Loads the records of a benchmark table from any reader.
///
/// The source path is only used in diagnostics.
///
pub fn load_from_reader<R>(mut reader: R, source: &Source) -> Result<Vec<BenchmarkRecord>, InputError>
where
    R: std::io::Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|error| InputError::Reading {
            error,
            path: source.path.clone(),
        })?;
    parse(text.as_str(), source)
}

///
/// Parses the text of a benchmark table.
///
pub fn parse(text: &str, source: &Source) -> Result<Vec<BenchmarkRecord>, InputError> {
    let path = source.path.as_path();
    if text.trim().is_empty() {
        return Err(InputError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let headers = reader.headers().map_err(|error| csv_error(error, path))?.clone();
    let layout = Layout::new(&headers, path)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|error| csv_error(error, path))?;
        let line = row
            .position()
            .map(|position| position.line())
            .unwrap_or((index as u64) + 2);
        records.push(layout.record(&row, line, source.device_label.as_deref())?);
    }
    Ok(records)
}

///
/// Wraps a CSV framing error with the file path.
///
fn csv_error(error: csv::Error, path: &Path) -> InputError {
    InputError::Csv {
        error,
        path: path.to_path_buf(),
    }
}

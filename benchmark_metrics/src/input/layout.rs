//!
//! Benchmark table column layout.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::input::column::Column;
use crate::input::error::Error as InputError;
use crate::model::record::BenchmarkRecord;

///
/// Positions of the known columns within a table header.
///
#[derive(Debug, Clone)]
pub struct Layout {
    /// The table file path, for diagnostics.
    path: PathBuf,
    /// The `FUNCTION` column index.
    function: usize,
    /// The `PROCESSORS` column index.
    processors: usize,
    /// The `TIME` column index.
    time: usize,
    /// The `GRIDSIZE` column index.
    grid_size: usize,
    /// The `FLOPS` column index, if the table has one.
    flops: Option<usize>,
}

impl Layout {
    ///
    /// Locates the known columns in a header row.
    ///
    /// Fails with a schema error naming every absent required column.
    ///
    pub fn new(headers: &csv::StringRecord, path: &Path) -> Result<Self, InputError> {
        let position = |column: Column| headers.iter().position(|header| column.matches(header));

        let missing: Vec<String> = Column::REQUIRED
            .iter()
            .filter(|column| position(**column).is_none())
            .map(|column| column.name().to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(InputError::Schema {
                path: path.to_path_buf(),
                missing,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            function: position(Column::Function).unwrap_or_default(),
            processors: position(Column::Processors).unwrap_or_default(),
            time: position(Column::Time).unwrap_or_default(),
            grid_size: position(Column::GridSize).unwrap_or_default(),
            flops: position(Column::Flops),
        })
    }

    ///
    /// Converts a data row into a validated record.
    ///
    pub fn record(
        &self,
        row: &csv::StringRecord,
        line: u64,
        device_label: Option<&str>,
    ) -> Result<BenchmarkRecord, InputError> {
        let function = self.cell(row, self.function).to_owned();
        if function.is_empty() {
            return Err(self.invalid(line, "FUNCTION is empty".to_owned()));
        }

        let processors: u32 = self.parse(row, line, Column::Processors, self.processors)?;
        if processors == 0 {
            return Err(self.invalid(line, "PROCESSORS must be positive".to_owned()));
        }

        let grid_size: u64 = self.parse(row, line, Column::GridSize, self.grid_size)?;
        if grid_size == 0 {
            return Err(self.invalid(line, "GRIDSIZE must be positive".to_owned()));
        }

        let time_seconds: f64 = self.parse(row, line, Column::Time, self.time)?;
        if !time_seconds.is_finite() || time_seconds <= 0.0 {
            return Err(self.invalid(
                line,
                format!("TIME must be a positive number of seconds, found {time_seconds}"),
            ));
        }

        let flop_count = match self.flops {
            Some(index) if !self.cell(row, index).is_empty() => {
                let flop_count: f64 = self.parse(row, line, Column::Flops, index)?;
                if !flop_count.is_finite() || flop_count < 0.0 {
                    return Err(self.invalid(
                        line,
                        format!("FLOPS must be a non-negative count, found {flop_count}"),
                    ));
                }
                Some(flop_count)
            }
            _ => None,
        };

        Ok(
            BenchmarkRecord::new(function, processors, grid_size, time_seconds, flop_count)
                .with_device_label(device_label.map(str::to_owned)),
        )
    }

    ///
    /// Returns a trimmed cell, or an empty string if the row is short.
    ///
    fn cell<'a>(&self, row: &'a csv::StringRecord, index: usize) -> &'a str {
        row.get(index).map(str::trim).unwrap_or_default()
    }

    ///
    /// Parses a cell into its column type.
    ///
    fn parse<T>(
        &self,
        row: &csv::StringRecord,
        line: u64,
        column: Column,
        index: usize,
    ) -> Result<T, InputError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.cell(row, index);
        value.parse::<T>().map_err(|error| InputError::Parsing {
            path: self.path.clone(),
            line,
            column,
            value: value.to_owned(),
            reason: error.to_string(),
        })
    }

    ///
    /// Builds a validation error for the current file.
    ///
    fn invalid(&self, line: u64, reason: String) -> InputError {
        InputError::Validation {
            path: self.path.clone(),
            line,
            reason,
        }
    }
}

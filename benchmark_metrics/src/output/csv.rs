//!
//! CSV output.
//!

use crate::input::column::Column;
use crate::output::report::Report;

///
/// Flat CSV table of metric rows.
///
/// Columns: `FUNCTION,PROCESSORS,GRIDSIZE,DEVICE,TIME,FLOPS,SPEEDUP,THROUGHPUT`.
/// Unset optional values are written as empty cells.
///
#[derive(Default)]
pub struct Csv {
    /// Serialized CSV.
    pub content: String,
}

impl Csv {
    /// The device label header.
    pub const HEADER_DEVICE: &'static str = "DEVICE";
    /// The speedup header.
    pub const HEADER_SPEEDUP: &'static str = "SPEEDUP";
    /// The throughput header.
    pub const HEADER_THROUGHPUT: &'static str = "THROUGHPUT";

    ///
    /// Formats an optional number as a cell.
    ///
    fn optional_cell(value: Option<f64>) -> String {
        value.map(|value| value.to_string()).unwrap_or_default()
    }
}

impl TryFrom<&Report> for Csv {
    type Error = anyhow::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let mut writer = csv::Writer::from_writer(Vec::with_capacity(4096));
        writer.write_record([
            Column::Function.name(),
            Column::Processors.name(),
            Column::GridSize.name(),
            Self::HEADER_DEVICE,
            Column::Time.name(),
            Column::Flops.name(),
            Self::HEADER_SPEEDUP,
            Self::HEADER_THROUGHPUT,
        ])?;
        for row in report.rows() {
            writer.write_record([
                row.record.function.clone(),
                row.record.processors.to_string(),
                row.record.grid_size.to_string(),
                row.record.device_label.clone().unwrap_or_default(),
                row.record.time_seconds.to_string(),
                Self::optional_cell(row.record.flop_count),
                Self::optional_cell(row.speedup),
                Self::optional_cell(row.throughput),
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|error| anyhow::anyhow!("CSV output flushing: {error}"))?;
        let content = String::from_utf8(bytes)?;
        Ok(Self { content })
    }
}

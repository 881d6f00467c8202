//!
//! XLSX output.
//!

pub mod worksheet;

use std::collections::BTreeSet;
use std::collections::HashMap;

use crate::model::metric_row::MetricRow;
use crate::output::report::Report;

use self::worksheet::Worksheet;

///
/// XLSX workbook with one worksheet per metric.
///
#[derive(Default)]
pub struct Xlsx {
    /// Worksheet for elapsed time.
    pub time_worksheet: Worksheet,
    /// Worksheet for speedup.
    pub speedup_worksheet: Worksheet,
    /// Worksheet for parallel efficiency.
    pub efficiency_worksheet: Worksheet,
    /// Worksheet for throughput. Only kept if any row has one.
    pub throughput_worksheet: Worksheet,
    /// Whether any throughput has been written.
    pub has_throughput: bool,

    /// Processor count column indexes.
    pub processors_ids: HashMap<u32, u16>,
}

impl Xlsx {
    /// The label of rows without a device.
    const NO_DEVICE: &'static str = "-";

    ///
    /// Creates a new XLSX workbook.
    ///
    pub fn new() -> anyhow::Result<Self> {
        let headers = vec![("Device", 20), ("Function", 30), ("Grid size", 12)];

        Ok(Self {
            time_worksheet: Worksheet::new("Time (s)", headers.clone())?,
            speedup_worksheet: Worksheet::new("Speedup", headers.clone())?,
            efficiency_worksheet: Worksheet::new("Efficiency", headers.clone())?,
            throughput_worksheet: Worksheet::new("Throughput (GFLOPS)", headers)?,
            has_throughput: false,

            processors_ids: HashMap::with_capacity(16),
        })
    }

    ///
    /// Allocates processor count columns in ascending order on every worksheet.
    ///
    pub fn allocate_processors(&mut self, processors: BTreeSet<u32>) -> anyhow::Result<()> {
        for (column_id, processors) in processors.into_iter().enumerate() {
            let column_id = column_id as u16;
            self.processors_ids.insert(processors, column_id);
            for worksheet in [
                &mut self.time_worksheet,
                &mut self.speedup_worksheet,
                &mut self.efficiency_worksheet,
                &mut self.throughput_worksheet,
            ] {
                worksheet.add_processors_column(processors, column_id)?;
            }
        }
        Ok(())
    }

    ///
    /// Writes every metric of a row.
    ///
    pub fn write_row(&mut self, row: &MetricRow) -> anyhow::Result<()> {
        let column_id = *self
            .processors_ids
            .get(&row.record.processors)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No column allocated for {} processors",
                    row.record.processors
                )
            })?;
        let device = row.record.device_label.as_deref().unwrap_or(Self::NO_DEVICE);
        let function = row.record.function.as_str();
        let grid_size = row.record.grid_size;

        self.time_worksheet.write_series_value(
            device,
            function,
            grid_size,
            column_id,
            row.record.time_seconds,
        )?;
        if let Some(speedup) = row.speedup {
            self.speedup_worksheet
                .write_series_value(device, function, grid_size, column_id, speedup)?;
        }
        if let Some(efficiency) = row.efficiency() {
            self.efficiency_worksheet.write_series_value(
                device,
                function,
                grid_size,
                column_id,
                efficiency,
            )?;
        }
        if let Some(throughput) = row.throughput {
            self.throughput_worksheet.write_series_value(
                device,
                function,
                grid_size,
                column_id,
                throughput / 1.0e9,
            )?;
            self.has_throughput = true;
        }
        Ok(())
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.time_worksheet.into_inner());
        workbook.push_worksheet(self.speedup_worksheet.into_inner());
        workbook.push_worksheet(self.efficiency_worksheet.into_inner());
        if self.has_throughput {
            workbook.push_worksheet(self.throughput_worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&Report> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new()?;

        let processors: BTreeSet<u32> = report.rows().map(|row| row.record.processors).collect();
        xlsx.allocate_processors(processors)?;

        for row in report.rows() {
            xlsx.write_row(row)?;
        }

        xlsx.time_worksheet.set_medians()?;
        xlsx.speedup_worksheet.set_medians()?;
        xlsx.efficiency_worksheet.set_medians()?;
        if xlsx.has_throughput {
            xlsx.throughput_worksheet.set_medians()?;
        }

        Ok(xlsx)
    }
}

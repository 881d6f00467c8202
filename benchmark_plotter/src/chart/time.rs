//!
//! Execution time against processor count.
//!

use benchmark_metrics::MetricRow;

use crate::config::chart::ChartConfig;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::figure::Figure;

///
/// Builds one figure per grid size with a series per function.
///
pub fn build(config: &ChartConfig, dataset: &Dataset) -> Result<Vec<Figure>, Error> {
    let rows = dataset.records().cloned().map(MetricRow::from).collect();
    super::processor_figures(
        config,
        dataset,
        rows,
        "Time (seconds)",
        |grid| format!("Execution Time vs Processors - Grid Size {grid}x{grid}"),
        |row| Some(row.record.time_seconds),
    )
    .map(|figures| figures.into_iter().map(|(_, figure)| figure).collect())
}

//!
//! Terminal summary of a single group.
//!

use crate::model::key::Key;
use crate::model::metric_row::MetricRow;

///
/// Headline figures of a derived group.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Human-readable group key.
    pub name: String,
    /// The single-processor time.
    pub baseline_time: f64,
    /// The processor count of the best speedup.
    pub best_processors: u32,
    /// The best speedup.
    pub best_speedup: f64,
    /// Parallel efficiency at the best speedup.
    pub best_efficiency: f64,
    /// The highest throughput, if any row has one.
    pub peak_throughput: Option<f64>,
}

impl Group {
    ///
    /// Summarizes derived rows.
    ///
    /// Returns `None` if no row carries a speedup.
    ///
    pub fn new(key: &Key, rows: &[MetricRow]) -> Option<Self> {
        let baseline = rows.iter().find(|row| row.record.is_baseline())?;
        let best = rows
            .iter()
            .filter(|row| row.speedup.is_some())
            .max_by(|a, b| {
                a.speedup
                    .unwrap_or_default()
                    .total_cmp(&b.speedup.unwrap_or_default())
                    .then_with(|| b.record.processors.cmp(&a.record.processors))
            })?;
        let peak_throughput = rows
            .iter()
            .filter_map(|row| row.throughput)
            .max_by(f64::total_cmp);

        Some(Self {
            name: key.to_string(),
            baseline_time: baseline.record.time_seconds,
            best_processors: best.record.processors,
            best_speedup: best.speedup.unwrap_or_default(),
            best_efficiency: best.efficiency().unwrap_or_default(),
            peak_throughput,
        })
    }
}

//!
//! A benchmark record annotated with derived metrics.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::model::record::BenchmarkRecord;

///
/// A benchmark record annotated with derived metrics.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    /// The source measurement.
    #[serde(flatten)]
    pub record: BenchmarkRecord,
    /// Baseline time divided by this row's time.
    /// Unset if the row has not been through speedup derivation.
    #[serde(default)]
    pub speedup: Option<f64>,
    /// Floating-point operations per second.
    /// Unset if the record carries no operation count.
    #[serde(default)]
    pub throughput: Option<f64>,
}

impl MetricRow {
    ///
    /// Sets the throughput from the record's operation count, if it has one.
    ///
    pub fn annotate_throughput(&mut self) {
        self.throughput = self
            .record
            .flop_count
            .map(|flop_count| flop_count / self.record.time_seconds);
    }

    ///
    /// Speedup per processor.
    ///
    pub fn efficiency(&self) -> Option<f64> {
        self.speedup
            .map(|speedup| speedup / (self.record.processors as f64))
    }
}

impl From<BenchmarkRecord> for MetricRow {
    fn from(record: BenchmarkRecord) -> Self {
        Self {
            record,
            speedup: None,
            throughput: None,
        }
    }
}

//!
//! A single benchmark measurement.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// A single benchmark measurement, one row of an input table.
///
/// Records are immutable once loaded.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Name of the benchmarked routine.
    pub function: String,
    /// Number of threads or processes the routine ran with.
    pub processors: u32,
    /// The N of the N×N problem domain.
    pub grid_size: u64,
    /// Measured wall-clock time in seconds.
    pub time_seconds: f64,
    /// Floating-point operations attributed to the run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flop_count: Option<f64>,
    /// Hardware label attached by the caller, never read from the table itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_label: Option<String>,
}

impl BenchmarkRecord {
    /// The processor count of the speedup baseline.
    pub const BASELINE_PROCESSORS: u32 = 1;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        function: String,
        processors: u32,
        grid_size: u64,
        time_seconds: f64,
        flop_count: Option<f64>,
    ) -> Self {
        Self {
            function,
            processors,
            grid_size,
            time_seconds,
            flop_count,
            device_label: None,
        }
    }

    ///
    /// Attaches a hardware label to the record.
    ///
    pub fn with_device_label(mut self, device_label: Option<String>) -> Self {
        self.device_label = device_label;
        self
    }

    ///
    /// Whether the record is the single-processor speedup baseline.
    ///
    pub fn is_baseline(&self) -> bool {
        self.processors == Self::BASELINE_PROCESSORS
    }
}

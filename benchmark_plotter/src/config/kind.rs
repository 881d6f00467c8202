//!
//! The chart kind.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The chart kind.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Execution time against processor count, one chart per grid size.
    Time,
    /// Speedup against processor count with the theoretical curve overlaid.
    Speedup,
    /// Floating-point throughput against processor count.
    Throughput,
    /// Execution time against grid size, one series per device.
    DeviceComparison,
}

impl std::str::FromStr for ChartKind {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "speedup" => Ok(Self::Speedup),
            "throughput" | "flops" => Ok(Self::Throughput),
            "device-comparison" => Ok(Self::DeviceComparison),
            string => anyhow::bail!(
                "Unknown chart kind `{string}`. Supported kinds: {}",
                [
                    Self::Time,
                    Self::Speedup,
                    Self::Throughput,
                    Self::DeviceComparison
                ]
                .into_iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<String>>()
                .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Speedup => write!(f, "speedup"),
            Self::Throughput => write!(f, "throughput"),
            Self::DeviceComparison => write!(f, "device-comparison"),
        }
    }
}

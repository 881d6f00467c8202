//!
//! Benchmark record grouping field.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::model::key::value::Value;
use crate::model::record::BenchmarkRecord;

///
/// Benchmark record grouping field.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    /// The benchmarked routine name.
    Function,
    /// The problem size.
    GridSize,
    /// The caller-provided hardware label.
    Device,
    /// The processor count.
    Processors,
}

impl Field {
    ///
    /// Extracts the field value from a record.
    ///
    pub fn extract(&self, record: &BenchmarkRecord) -> Value {
        match self {
            Self::Function => Value::Text(record.function.clone()),
            Self::GridSize => Value::Integer(record.grid_size),
            Self::Device => match record.device_label.as_ref() {
                Some(label) => Value::Text(label.clone()),
                None => Value::Absent,
            },
            Self::Processors => Value::Integer(record.processors as u64),
        }
    }
}

impl std::str::FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "function" => Ok(Self::Function),
            "grid-size" | "gridsize" => Ok(Self::GridSize),
            "device" => Ok(Self::Device),
            "processors" => Ok(Self::Processors),
            string => anyhow::bail!(
                "Unknown grouping field `{string}`. Supported fields: {}",
                vec![Self::Function, Self::GridSize, Self::Device, Self::Processors]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::GridSize => write!(f, "grid-size"),
            Self::Device => write!(f, "device"),
            Self::Processors => write!(f, "processors"),
        }
    }
}

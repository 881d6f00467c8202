//!
//! Benchmark record grouping value.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// Benchmark record grouping value.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An absent optional field, e.g. a record without a device label.
    Absent,
    /// A numeric field.
    Integer(u64),
    /// A textual field.
    Text(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "-"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

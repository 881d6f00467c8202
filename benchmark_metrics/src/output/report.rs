//!
//! The derived metrics report.
//!

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::derive::policy::BaselinePolicy;
use crate::derive::Derivation;
use crate::input::source::Source;
use crate::model::key::field::Field as KeyField;
use crate::model::key::Key;
use crate::model::metric_row::MetricRow;

///
/// Run metadata.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// The run start time.
    pub start: DateTime<Utc>,
    /// The run end time.
    pub end: DateTime<Utc>,
    /// The loaded input sources.
    pub inputs: Vec<Source>,
    /// The missing baseline handling policy.
    pub baseline_policy: BaselinePolicy,
}

///
/// A group of derived rows.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Human-readable group key.
    pub name: String,
    /// The structured group key.
    pub key: Key,
    /// The rows, sorted by processor count.
    pub rows: Vec<MetricRow>,
}

///
/// The derived metrics report.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata.
    pub metadata: Metadata,
    /// The fields the groups are keyed by.
    pub key_fields: Vec<KeyField>,
    /// The derived groups, in key order.
    pub groups: Vec<Group>,
    /// Descriptions of the groups left out for lack of a baseline.
    #[serde(default)]
    pub skipped: Vec<String>,
}

impl Report {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(metadata: Metadata, derivation: Derivation) -> Self {
        let skipped = derivation
            .skipped
            .iter()
            .map(|error| error.to_string())
            .collect();
        let groups = derivation
            .groups
            .into_iter()
            .map(|(key, rows)| Group {
                name: key.to_string(),
                key,
                rows,
            })
            .collect();
        Self {
            metadata,
            key_fields: derivation.key_fields,
            groups,
            skipped,
        }
    }

    ///
    /// Iterates over the rows of all groups.
    ///
    pub fn rows(&self) -> impl Iterator<Item = &MetricRow> {
        self.groups.iter().flat_map(|group| group.rows.iter())
    }
}

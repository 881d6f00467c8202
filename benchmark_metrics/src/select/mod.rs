//!
//! Benchmark record selection.
//!

pub mod ranking;

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::model::record::BenchmarkRecord;

///
/// Benchmark record filter.
///
/// An unset criterion matches everything.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Processor counts to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processors: Option<BTreeSet<u32>>,
    /// Grid sizes to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_sizes: Option<BTreeSet<u64>>,
    /// Function names to keep.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<BTreeSet<String>>,
}

impl Filter {
    ///
    /// Builds a filter from command-line lists, where an empty list means no criterion.
    ///
    pub fn from_lists(processors: Vec<u32>, grid_sizes: Vec<u64>, functions: Vec<String>) -> Self {
        Self {
            processors: Some(processors.into_iter().collect::<BTreeSet<u32>>())
                .filter(|set| !set.is_empty()),
            grid_sizes: Some(grid_sizes.into_iter().collect::<BTreeSet<u64>>())
                .filter(|set| !set.is_empty()),
            functions: Some(functions.into_iter().collect::<BTreeSet<String>>())
                .filter(|set| !set.is_empty()),
        }
    }

    ///
    /// Whether the record satisfies every set criterion.
    ///
    pub fn matches(&self, record: &BenchmarkRecord) -> bool {
        self.processors
            .as_ref()
            .map_or(true, |processors| processors.contains(&record.processors))
            && self
                .grid_sizes
                .as_ref()
                .map_or(true, |grid_sizes| grid_sizes.contains(&record.grid_size))
            && self
                .functions
                .as_ref()
                .map_or(true, |functions| functions.contains(&record.function))
    }

    ///
    /// Keeps the matching records, preserving their order.
    ///
    pub fn apply(&self, mut records: Vec<BenchmarkRecord>) -> Vec<BenchmarkRecord> {
        records.retain(|record| self.matches(record));
        records
    }
}

#[cfg(test)]
mod tests {
    use crate::model::record::BenchmarkRecord;

    use super::Filter;

    #[test]
    fn empty_lists_match_everything() {
        let filter = Filter::from_lists(vec![], vec![], vec![]);

        assert_eq!(filter, Filter::default());
        assert!(filter.matches(&BenchmarkRecord::new("F".to_owned(), 3, 7, 1.0, None)));
    }

    #[test]
    fn criteria_combine() {
        let filter = Filter::from_lists(vec![48], vec![8192, 16384], vec![]);
        let records = vec![
            BenchmarkRecord::new("F".to_owned(), 48, 8192, 1.0, None),
            BenchmarkRecord::new("F".to_owned(), 1, 8192, 1.0, None),
            BenchmarkRecord::new("G".to_owned(), 48, 1024, 1.0, None),
            BenchmarkRecord::new("G".to_owned(), 48, 16384, 1.0, None),
        ];

        let kept = filter.apply(records);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].function, "F");
        assert_eq!(kept[1].grid_size, 16384);
    }
}

//!
//! Metric derivation: grouping, speedup and throughput.
//!

pub mod error;
pub mod policy;
pub mod theoretical;

use std::collections::BTreeMap;

use crate::model::key::field::Field as KeyField;
use crate::model::key::Key;
use crate::model::metric_row::MetricRow;
use crate::model::record::BenchmarkRecord;

use self::error::Error as DeriveError;
use self::policy::BaselinePolicy;

///
/// Partitions records by the values of the given fields.
///
/// Every record lands in exactly one group. Records keep their input order
/// within a group.
///
pub fn group_by(
    records: Vec<BenchmarkRecord>,
    key_fields: &[KeyField],
) -> BTreeMap<Key, Vec<BenchmarkRecord>> {
    let mut groups: BTreeMap<Key, Vec<BenchmarkRecord>> = BTreeMap::new();
    for record in records.into_iter() {
        groups
            .entry(Key::of(&record, key_fields))
            .or_default()
            .push(record);
    }
    groups
}

///
/// Computes the speedup of every record of a group relative to its
/// single-processor record.
///
/// The rows are sorted by ascending processor count. Fails without partial
/// results if the group has no single-processor record, or several.
///
pub fn compute_speedup(
    key: &Key,
    group: &[BenchmarkRecord],
) -> Result<Vec<MetricRow>, DeriveError> {
    let mut baselines = group.iter().filter(|record| record.is_baseline());
    let baseline = match (baselines.next(), baselines.next()) {
        (Some(baseline), None) => baseline,
        _ => {
            return Err(DeriveError::BaselineMissing {
                key: key.to_owned(),
                found: group.iter().filter(|record| record.is_baseline()).count(),
            })
        }
    };
    let baseline_time = baseline.time_seconds;

    let mut rows: Vec<MetricRow> = group
        .iter()
        .map(|record| {
            let mut row = MetricRow::from(record.to_owned());
            row.speedup = Some(baseline_time / record.time_seconds);
            row
        })
        .collect();
    rows.sort_by_key(|row| row.record.processors);
    Ok(rows)
}

///
/// Annotates throughput on every record that carries an operation count.
///
/// Records without one are passed through with throughput unset.
///
pub fn compute_throughput<I, R>(records: I) -> Vec<MetricRow>
where
    I: IntoIterator<Item = R>,
    R: Into<MetricRow>,
{
    records
        .into_iter()
        .map(|record| {
            let mut row: MetricRow = record.into();
            row.annotate_throughput();
            row
        })
        .collect()
}

///
/// The metrics deriver.
///
/// Groups records and computes speedup and throughput for every group.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsDeriver {
    /// The fields records are grouped by.
    pub key_fields: Vec<KeyField>,
    /// The missing baseline handling policy.
    pub baseline_policy: BaselinePolicy,
}

impl Default for MetricsDeriver {
    fn default() -> Self {
        Self::new(
            vec![KeyField::Function, KeyField::GridSize, KeyField::Device],
            BaselinePolicy::default(),
        )
    }
}

impl MetricsDeriver {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(key_fields: Vec<KeyField>, baseline_policy: BaselinePolicy) -> Self {
        Self {
            key_fields,
            baseline_policy,
        }
    }

    ///
    /// Derives the metric rows of every group.
    ///
    /// With [`BaselinePolicy::Abort`], the first group without a valid baseline
    /// fails the derivation. With [`BaselinePolicy::Skip`], such groups are
    /// left out and reported in [`Derivation::skipped`].
    ///
    pub fn derive(&self, records: Vec<BenchmarkRecord>) -> Result<Derivation, DeriveError> {
        let mut derivation = Derivation::new(self.key_fields.clone());

        for (key, group) in group_by(records, self.key_fields.as_slice()).into_iter() {
            match compute_speedup(&key, group.as_slice()) {
                Ok(rows) => {
                    derivation.groups.insert(key, compute_throughput(rows));
                }
                Err(error) => match self.baseline_policy {
                    BaselinePolicy::Abort => return Err(error),
                    BaselinePolicy::Skip => derivation.skipped.push(error),
                },
            }
        }

        Ok(derivation)
    }
}

///
/// The result of a metric derivation.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Derivation {
    /// The fields the groups are keyed by.
    pub key_fields: Vec<KeyField>,
    /// The derived rows of each group, sorted by processor count.
    pub groups: BTreeMap<Key, Vec<MetricRow>>,
    /// The groups left out under the skipping policy.
    pub skipped: Vec<DeriveError>,
}

impl Derivation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(key_fields: Vec<KeyField>) -> Self {
        Self {
            key_fields,
            groups: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }

    ///
    /// Iterates over the rows of all groups.
    ///
    pub fn rows(&self) -> impl Iterator<Item = &MetricRow> {
        self.groups.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::key::field::Field as KeyField;
    use crate::model::key::Key;
    use crate::model::record::BenchmarkRecord;

    use super::error::Error as DeriveError;
    use super::policy::BaselinePolicy;
    use super::MetricsDeriver;

    fn record(function: &str, processors: u32, grid_size: u64, time_seconds: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(function.to_owned(), processors, grid_size, time_seconds, None)
    }

    #[test]
    fn speedup_reference_case() {
        let group = vec![
            record("F", 4, 100, 4.0),
            record("F", 1, 100, 10.0),
            record("F", 2, 100, 6.0),
        ];
        let key = Key::of(&group[0], &[KeyField::Function, KeyField::GridSize]);

        let rows = super::compute_speedup(&key, group.as_slice()).expect("Always valid");

        let processors: Vec<u32> = rows.iter().map(|row| row.record.processors).collect();
        assert_eq!(processors, vec![1, 2, 4]);
        let speedups: Vec<f64> = rows.iter().filter_map(|row| row.speedup).collect();
        assert_eq!(speedups[0], 1.0);
        assert!((speedups[1] - 10.0 / 6.0).abs() < 1e-12);
        assert!((speedups[1] - 1.667).abs() < 1e-3);
        assert_eq!(speedups[2], 2.5);
    }

    #[test]
    fn speedup_baseline_is_exactly_one() {
        for time_seconds in [0.1, 1.0 / 3.0, 7.77e-5, 12345.678] {
            let group = vec![
                record("F", 1, 64, time_seconds),
                record("F", 8, 64, time_seconds / 5.0),
            ];

            let rows =
                super::compute_speedup(&Key::default(), group.as_slice()).expect("Always valid");

            assert_eq!(rows[0].speedup, Some(1.0));
            assert!(rows
                .iter()
                .filter_map(|row| row.speedup)
                .all(|speedup| speedup.is_finite() && speedup >= 0.0));
        }
    }

    #[test]
    fn speedup_error_no_baseline() {
        let group = vec![record("F", 2, 100, 6.0), record("F", 4, 100, 4.0)];
        let key = Key::of(&group[0], &[KeyField::Function, KeyField::GridSize]);

        let result = super::compute_speedup(&key, group.as_slice());

        assert_eq!(
            result,
            Err(DeriveError::BaselineMissing {
                key: key.clone(),
                found: 0
            })
        );
    }

    #[test]
    fn speedup_error_ambiguous_baseline() {
        let group = vec![record("F", 1, 100, 10.0), record("F", 1, 100, 11.0)];

        let result = super::compute_speedup(&Key::default(), group.as_slice());

        assert!(matches!(
            result,
            Err(DeriveError::BaselineMissing { found: 2, .. })
        ));
    }

    #[test]
    fn throughput_optional() {
        let records = vec![
            BenchmarkRecord::new("F".to_owned(), 1, 100, 2.0, Some(8.0e9)),
            record("F", 2, 100, 1.0),
        ];

        let rows = super::compute_throughput(records);

        assert_eq!(rows[0].throughput, Some(4.0e9));
        assert_eq!(rows[1].throughput, None);
        assert!(rows.iter().all(|row| row.speedup.is_none()));
    }

    #[test]
    fn group_by_partitions_every_record_once() {
        let records = vec![
            record("A", 1, 100, 1.0),
            record("B", 1, 100, 1.0),
            record("A", 2, 100, 0.6),
            record("A", 1, 200, 4.0),
            record("B", 2, 100, 0.7),
            record("A", 2, 200, 2.1),
        ];
        let total = records.len();

        let groups = super::group_by(records, &[KeyField::Function, KeyField::GridSize]);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), total);
        for (key, group) in groups.iter() {
            assert!(group
                .iter()
                .all(|record| Key::of(record, &[KeyField::Function, KeyField::GridSize]) == *key));
        }
        let first_a = groups
            .iter()
            .find(|(key, _)| key.function() == Some("A") && key.grid_size() == Some(100))
            .map(|(_, group)| group)
            .expect("Always exists");
        assert_eq!(first_a[0].processors, 1);
        assert_eq!(first_a[1].processors, 2);
    }

    #[test]
    fn deriver_abort_policy() {
        let records = vec![record("A", 1, 100, 1.0), record("B", 2, 100, 1.0)];
        let deriver = MetricsDeriver::new(
            vec![KeyField::Function, KeyField::GridSize],
            BaselinePolicy::Abort,
        );

        let result = deriver.derive(records);

        match result {
            Err(DeriveError::BaselineMissing { key, found }) => {
                assert_eq!(key.function(), Some("B"));
                assert_eq!(found, 0);
            }
            result => panic!("Unexpected result: {result:?}"),
        }
    }

    #[test]
    fn deriver_skip_policy() {
        let records = vec![
            BenchmarkRecord::new("A".to_owned(), 1, 100, 1.0, Some(1.0e6)),
            BenchmarkRecord::new("A".to_owned(), 2, 100, 0.5, Some(1.0e6)),
            record("B", 2, 100, 1.0),
        ];
        let deriver = MetricsDeriver::new(
            vec![KeyField::Function, KeyField::GridSize],
            BaselinePolicy::Skip,
        );

        let derivation = deriver.derive(records).expect("Always valid");

        assert_eq!(derivation.groups.len(), 1);
        assert_eq!(derivation.skipped.len(), 1);
        let rows: Vec<_> = derivation.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].speedup, Some(2.0));
        assert_eq!(rows[1].throughput, Some(2.0e6));
        assert_eq!(rows[1].efficiency(), Some(1.0));
    }

    #[test]
    fn deriver_separates_devices() {
        let records = vec![
            record("A", 1, 100, 1.0).with_device_label(Some("CPU".to_owned())),
            record("A", 1, 100, 0.1).with_device_label(Some("GPU".to_owned())),
            record("A", 4, 100, 0.5).with_device_label(Some("CPU".to_owned())),
        ];

        let derivation = MetricsDeriver::default()
            .derive(records)
            .expect("Always valid");

        assert_eq!(derivation.groups.len(), 2);
        let cpu = derivation
            .groups
            .iter()
            .find(|(key, _)| key.device() == Some("CPU"))
            .map(|(_, rows)| rows)
            .expect("Always exists");
        assert_eq!(cpu.len(), 2);
        assert_eq!(cpu[1].speedup, Some(2.0));
    }
}

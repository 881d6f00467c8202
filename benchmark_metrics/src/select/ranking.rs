//!
//! Function ranking by elapsed time.
//!

use std::collections::BTreeMap;

use crate::model::record::BenchmarkRecord;

///
/// Returns up to `count` function names, slowest mean time first.
///
/// Ties are broken by name.
///
pub fn rank_slowest(records: &[BenchmarkRecord], count: usize) -> Vec<String> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in records.iter() {
        let total = totals.entry(record.function.as_str()).or_insert((0.0, 0));
        total.0 += record.time_seconds;
        total.1 += 1;
    }

    let mut means: Vec<(&str, f64)> = totals
        .into_iter()
        .map(|(function, (sum, number))| (function, sum / (number as f64)))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    means
        .into_iter()
        .take(count)
        .map(|(function, _)| function.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::model::record::BenchmarkRecord;

    #[test]
    fn slowest_first() {
        let records = vec![
            BenchmarkRecord::new("fast".to_owned(), 48, 1024, 0.1, None),
            BenchmarkRecord::new("slow".to_owned(), 48, 1024, 9.0, None),
            BenchmarkRecord::new("middle".to_owned(), 48, 1024, 1.0, None),
            BenchmarkRecord::new("slow".to_owned(), 48, 2048, 11.0, None),
            BenchmarkRecord::new("middle".to_owned(), 48, 2048, 3.0, None),
        ];

        assert_eq!(
            super::rank_slowest(records.as_slice(), 2),
            vec!["slow".to_owned(), "middle".to_owned()]
        );
        assert_eq!(super::rank_slowest(records.as_slice(), 10).len(), 3);
        assert!(super::rank_slowest(&[], 2).is_empty());
    }
}

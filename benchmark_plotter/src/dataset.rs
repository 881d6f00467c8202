//!
//! The benchmark records of a chart.
//!

use std::collections::BTreeSet;

use benchmark_metrics::BenchmarkRecord;

use crate::config::input::InputConfig;

///
/// The records loaded from one chart input.
///
#[derive(Debug, Clone)]
pub struct InputData {
    /// The input configuration.
    pub input: InputConfig,
    /// The records, labeled with the input's device label.
    pub records: Vec<BenchmarkRecord>,
}

///
/// The benchmark records of a chart, per input.
///
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// The inputs, in configuration order.
    pub inputs: Vec<InputData>,
}

impl Dataset {
    ///
    /// Loads every input, keeping the requested grid sizes and the per-input processor count.
    ///
    pub fn load(
        inputs: &[InputConfig],
        grid_sizes: &[u64],
    ) -> Result<Self, benchmark_metrics::Error> {
        let mut dataset = Self::default();
        for input in inputs.iter() {
            let source = benchmark_metrics::InputSource::new(input.path.clone(), Some(input.label()));
            let records = benchmark_metrics::load(&source)?;
            dataset.push(input.clone(), records, grid_sizes);
        }
        Ok(dataset)
    }

    ///
    /// Adds the records of an input, applying its selection.
    ///
    pub fn push(&mut self, input: InputConfig, records: Vec<BenchmarkRecord>, grid_sizes: &[u64]) {
        let filter = benchmark_metrics::Filter::from_lists(
            input.processors.into_iter().collect(),
            grid_sizes.to_vec(),
            vec![],
        );
        let label = input.label();
        let records = filter
            .apply(records)
            .into_iter()
            .map(|record| record.with_device_label(Some(label.clone())))
            .collect();
        self.inputs.push(InputData { input, records });
    }

    ///
    /// All records, in input order.
    ///
    pub fn records(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.inputs.iter().flat_map(|input| input.records.iter())
    }

    ///
    /// The sorted distinct function names.
    ///
    pub fn functions(&self) -> Vec<String> {
        self.records()
            .map(|record| record.function.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    ///
    /// Whether the input with the device label is drawn dashed.
    ///
    pub fn is_dashed(&self, label: &str) -> bool {
        self.inputs
            .iter()
            .any(|input| input.input.dashed && input.input.label() == label)
    }

    ///
    /// Whether the records come from more than one input.
    ///
    pub fn is_multi_device(&self) -> bool {
        self.inputs.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use benchmark_metrics::BenchmarkRecord;

    use crate::config::input::InputConfig;

    use super::Dataset;

    #[test]
    fn push_applies_selection() {
        let mut input = InputConfig::new(PathBuf::from("results/x86.csv"));
        input.label = Some("CPU".to_owned());
        input.processors = Some(48);
        let records = vec![
            BenchmarkRecord::new("jacobi".to_owned(), 1, 1024, 10.0, None),
            BenchmarkRecord::new("jacobi".to_owned(), 48, 1024, 1.0, None),
            BenchmarkRecord::new("jacobi".to_owned(), 48, 2048, 4.0, None),
            BenchmarkRecord::new("gauss".to_owned(), 48, 1024, 2.0, None),
        ];

        let mut dataset = Dataset::default();
        dataset.push(input, records, &[1024]);

        assert_eq!(dataset.records().count(), 2);
        assert!(dataset
            .records()
            .all(|record| record.device_label.as_deref() == Some("CPU")));
        assert_eq!(dataset.functions(), vec!["gauss", "jacobi"]);
        assert!(!dataset.is_multi_device());
    }

    #[test]
    fn load_missing_file() {
        let input = InputConfig::new(PathBuf::from("results/does_not_exist.csv"));

        assert!(Dataset::load(&[input], &[]).is_err());
    }
}

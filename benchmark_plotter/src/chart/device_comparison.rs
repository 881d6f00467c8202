//!
//! Execution time against grid size across devices.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::config::chart::ChartConfig;
use crate::config::kind::ChartKind;
use crate::dataset::Dataset;
use crate::dataset::InputData;
use crate::error::Error;
use crate::figure::panel::Panel;
use crate::figure::series::Marker;
use crate::figure::series::Series;
use crate::figure::Figure;

/// The x axis description.
pub const LABEL_GRID_SIZE: &str = "Grid Size (N × N)";

/// The y axis description.
pub const LABEL_TIME: &str = "Execution Time (seconds)";

///
/// Builds a figure per slowest function plus a combined figure with a panel per function.
///
/// The functions are ranked by their mean time on the first input.
/// Every input must hold one processor count per function and grid size.
///
pub fn build(config: &ChartConfig, dataset: &Dataset) -> Result<Vec<Figure>, Error> {
    for input in dataset.inputs.iter() {
        check_single_configuration(input)?;
    }

    let functions = match dataset.inputs.first() {
        Some(reference) => benchmark_metrics::rank_slowest(reference.records.as_slice(), config.count),
        None => return Ok(vec![]),
    };

    let mut figures = Vec::with_capacity(functions.len() + 1);
    let mut panels = Vec::with_capacity(functions.len());
    for function in functions.iter() {
        let panel = panel(config, dataset, function.as_str());
        if panel.is_empty() {
            continue;
        }

        let mut single = panel.clone();
        single.title = Some(super::title(
            config,
            format!("Device Comparison: {function}"),
            None,
            Some(function.as_str()),
        )?);
        let file_name =
            super::file_name::file_name(config.output_template(), None, Some(function.as_str()))?;
        figures.push(Figure::single(file_name, single));
        panels.push(panel);
    }

    if !panels.is_empty() {
        let file_name = super::file_name::file_name(config.combined_output_template(), None, None)?;
        figures.push(Figure::multiple(
            file_name,
            "Device Comparison - Slowest Functions".to_owned(),
            panels,
        ));
    }
    Ok(figures)
}

///
/// Fails if a function at some grid size was measured with several processor counts.
///
fn check_single_configuration(input: &InputData) -> Result<(), Error> {
    let mut processors: BTreeMap<(&str, u64), u32> = BTreeMap::new();
    for record in input.records.iter() {
        let key = (record.function.as_str(), record.grid_size);
        match processors.insert(key, record.processors) {
            Some(previous) if previous != record.processors => {
                return Err(Error::Configuration {
                    chart: ChartKind::DeviceComparison.to_string(),
                    reason: format!(
                        "input `{}` has `{}` at grid size {} measured with {previous} and {} processors; \
                         select one processor count as `{}@PROCESSORS`",
                        input.input.label(),
                        record.function,
                        record.grid_size,
                        record.processors,
                        input.input.path.display(),
                    ),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

///
/// The panel of a function, titled with its name, with a series per input.
///
fn panel(config: &ChartConfig, dataset: &Dataset, function: &str) -> Panel {
    let mut panel = Panel::new(
        Some(function.to_owned()),
        LABEL_GRID_SIZE,
        LABEL_TIME,
        config.x_scale(),
        config.y_scale(),
    );

    let mut grid_sizes = BTreeSet::new();
    for (index, input) in dataset.inputs.iter().enumerate() {
        let mut records: Vec<_> = input
            .records
            .iter()
            .filter(|record| record.function == function)
            .collect();
        if records.is_empty() {
            continue;
        }
        records.sort_by_key(|record| (record.grid_size, record.processors));
        grid_sizes.extend(records.iter().map(|record| record.grid_size));

        let points = records
            .iter()
            .map(|record| (record.grid_size as f64, record.time_seconds))
            .collect();
        panel.series.push(
            Series::new(input.input.label(), points, Some(index))
                .dashed(input.input.dashed)
                .marker(Some(Marker::cycle(index))),
        );
    }
    panel.x_ticks = grid_sizes.into_iter().map(|grid| grid as f64).collect();
    panel
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use benchmark_metrics::BenchmarkRecord;

    use crate::config::chart::ChartConfig;
    use crate::config::input::InputConfig;
    use crate::config::kind::ChartKind;
    use crate::config::scale::Scale;
    use crate::dataset::Dataset;
    use crate::figure::series::Marker;

    fn dataset() -> Dataset {
        let mut cpu = InputConfig::new(PathBuf::from("results/benchmark_x86.csv"));
        cpu.label = Some("CPU x86 (48p)".to_owned());
        cpu.processors = Some(48);
        let mut a100 = InputConfig::new(PathBuf::from("results/benchmark_cuda_a100.csv"));
        a100.label = Some("NVIDIA A100".to_owned());
        a100.dashed = true;

        let mut dataset = Dataset::default();
        dataset.push(
            cpu,
            vec![
                BenchmarkRecord::new("jacobi".to_owned(), 48, 2048, 8.0, None),
                BenchmarkRecord::new("jacobi".to_owned(), 48, 1024, 2.0, None),
                BenchmarkRecord::new("jacobi".to_owned(), 1, 1024, 50.0, None),
                BenchmarkRecord::new("gauss".to_owned(), 48, 1024, 3.0, None),
                BenchmarkRecord::new("gauss".to_owned(), 48, 2048, 12.0, None),
                BenchmarkRecord::new("copy".to_owned(), 48, 1024, 0.1, None),
            ],
            &[],
        );
        dataset.push(
            a100,
            vec![
                BenchmarkRecord::new("jacobi".to_owned(), 1, 1024, 0.2, None),
                BenchmarkRecord::new("gauss".to_owned(), 1, 1024, 0.3, None),
                BenchmarkRecord::new("gauss".to_owned(), 1, 4096, 1.2, None),
            ],
            &[],
        );
        dataset
    }

    #[test]
    fn slowest_functions() {
        let config = ChartConfig::new(ChartKind::DeviceComparison, vec![]);

        let figures = super::build(&config, &dataset()).expect("Always valid");

        assert_eq!(figures.len(), 3);
        assert_eq!(figures[0].file_name, "device_comparison_gauss.png");
        assert_eq!(figures[1].file_name, "device_comparison_jacobi.png");
        assert_eq!(
            figures[2].file_name,
            "device_comparison_slowest_functions.png"
        );
        assert_eq!(figures[2].panels.len(), 2);
        assert_eq!(figures[2].panels[0].title.as_deref(), Some("gauss"));
        assert_eq!(
            figures[0].panels[0].title.as_deref(),
            Some("Device Comparison: gauss")
        );
    }

    #[test]
    fn series_per_device() {
        let config = ChartConfig::new(ChartKind::DeviceComparison, vec![]);

        let figures = super::build(&config, &dataset()).expect("Always valid");

        let panel = &figures[0].panels[0];
        assert_eq!(panel.x_scale, Scale::Linear);
        assert_eq!(panel.x_ticks, vec![1024.0, 2048.0, 4096.0]);
        assert_eq!(panel.series.len(), 2);
        assert_eq!(panel.series[0].label, "CPU x86 (48p)");
        assert!(!panel.series[0].dashed);
        assert_eq!(panel.series[0].points, vec![(1024.0, 3.0), (2048.0, 12.0)]);
        assert_eq!(panel.series[1].label, "NVIDIA A100");
        assert!(panel.series[1].dashed);
        assert_eq!(panel.series[1].color, Some(1));
        assert_eq!(panel.series[0].marker, Some(Marker::Circle));
        assert_eq!(panel.series[1].marker, Some(Marker::Square));
    }

    #[test]
    fn mixed_processor_counts() {
        let mut dataset = Dataset::default();
        dataset.push(
            InputConfig::new(PathBuf::from("results/benchmark_x86.csv")),
            vec![
                BenchmarkRecord::new("jacobi".to_owned(), 1, 1024, 10.0, None),
                BenchmarkRecord::new("jacobi".to_owned(), 48, 1024, 0.5, None),
                BenchmarkRecord::new("jacobi".to_owned(), 1, 2048, 40.0, None),
                BenchmarkRecord::new("jacobi".to_owned(), 48, 2048, 2.0, None),
            ],
            &[],
        );
        let config = ChartConfig::new(ChartKind::DeviceComparison, vec![]);

        let error = super::build(&config, &dataset).expect_err("Always invalid");

        assert!(error.to_string().contains("results/benchmark_x86.csv@PROCESSORS"));
    }

    #[test]
    fn repeated_measurements() {
        let mut dataset = Dataset::default();
        dataset.push(
            InputConfig::new(PathBuf::from("results/benchmark_cuda_t4.csv")),
            vec![
                BenchmarkRecord::new("jacobi".to_owned(), 1, 1024, 0.3, None),
                BenchmarkRecord::new("jacobi".to_owned(), 1, 1024, 0.4, None),
            ],
            &[],
        );
        let config = ChartConfig::new(ChartKind::DeviceComparison, vec![]);

        assert_eq!(
            super::build(&config, &dataset).expect("Always valid").len(),
            2
        );
    }

    #[test]
    fn count() {
        let mut config = ChartConfig::new(ChartKind::DeviceComparison, vec![]);
        config.count = 1;

        let figures = super::build(&config, &dataset()).expect("Always valid");

        assert_eq!(figures.len(), 2);
        assert_eq!(figures[1].panels.len(), 1);
    }

    #[test]
    fn empty_dataset() {
        let config = ChartConfig::new(ChartKind::DeviceComparison, vec![]);

        assert!(super::build(&config, &Dataset::default())
            .expect("Always valid")
            .is_empty());
    }
}

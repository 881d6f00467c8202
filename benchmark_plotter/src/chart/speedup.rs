//!
//! Speedup against processor count.
//!

use std::collections::BTreeMap;

use benchmark_metrics::KeyField;
use benchmark_metrics::MetricRow;

use crate::chart::Line;
use crate::config::chart::ChartConfig;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::figure::panel::Panel;
use crate::figure::series::Series;
use crate::figure::Figure;

/// The legend label of the theoretical curve.
pub const LABEL_THEORETICAL: &str = "Theoretical speedup O(n²/((n²/p)+p))";

///
/// Builds the speedup figures: per grid size, or per function and grid size.
///
pub fn build(config: &ChartConfig, dataset: &Dataset) -> Result<Vec<Figure>, Error> {
    let deriver = benchmark_metrics::MetricsDeriver::new(
        vec![KeyField::Function, KeyField::GridSize, KeyField::Device],
        config.baseline_policy,
    );
    let derivation = deriver
        .derive(dataset.records().cloned().collect())
        .map_err(benchmark_metrics::Error::from)?;
    let rows: Vec<MetricRow> = derivation.rows().cloned().collect();

    if config.per_function {
        per_function(config, dataset, rows)
    } else {
        comparison(config, dataset, rows)
    }
}

///
/// The dashed black theoretical speedup curve over the processor counts.
///
pub fn theoretical_series(grid_size: u64, processors: &[u32]) -> Series {
    let points = benchmark_metrics::theoretical_speedup_curve(grid_size, processors)
        .into_iter()
        .map(|(processors, value)| (processors as f64, value))
        .collect();
    Series::new(LABEL_THEORETICAL.to_owned(), points, None)
        .dashed(true)
        .marker(None)
}

///
/// One figure per grid size, one series per function.
///
fn comparison(
    config: &ChartConfig,
    dataset: &Dataset,
    rows: Vec<MetricRow>,
) -> Result<Vec<Figure>, Error> {
    let figures = super::processor_figures(
        config,
        dataset,
        rows,
        "Speedup",
        |grid| format!("Speedup Comparison by Function - Grid Size {grid}x{grid}"),
        |row| row.speedup,
    )?;
    Ok(figures
        .into_iter()
        .map(|(grid_size, mut figure)| {
            for panel in figure.panels.iter_mut() {
                let processors: Vec<u32> = panel.x_ticks.iter().map(|tick| *tick as u32).collect();
                panel
                    .series
                    .push(theoretical_series(grid_size, processors.as_slice()));
            }
            figure
        })
        .collect())
}

///
/// One figure per function and grid size, one series per device.
///
fn per_function(
    config: &ChartConfig,
    dataset: &Dataset,
    rows: Vec<MetricRow>,
) -> Result<Vec<Figure>, Error> {
    let colors = super::palette_indexes(dataset.functions());
    let multi_device = dataset.is_multi_device();

    let mut figures = Vec::new();
    for (grid_size, lines) in super::lines_by_grid(rows).into_iter() {
        let mut by_function: BTreeMap<&str, Vec<&Line>> = BTreeMap::new();
        for line in lines.iter() {
            by_function
                .entry(line.function.as_str())
                .or_default()
                .push(line);
        }

        for (function, lines) in by_function.into_iter() {
            let title = super::title(
                config,
                format!("Speedup for {function} with grid size {grid_size}"),
                Some(grid_size),
                Some(function),
            )?;
            let mut panel = Panel::new(
                Some(title),
                "Number of Processors",
                "Speedup",
                config.x_scale(),
                config.y_scale(),
            );
            let processors = super::processor_ticks(lines.iter().copied());
            panel.x_ticks = processors.iter().copied().map(f64::from).collect();
            for (index, line) in lines.iter().enumerate() {
                let dashed = line
                    .device
                    .as_deref()
                    .map(|device| dataset.is_dashed(device))
                    .unwrap_or_default();
                let color = if multi_device {
                    Some(index)
                } else {
                    colors.get(function).copied()
                };
                panel.series.push(line.series(
                    line.label(format!("{function} {grid_size}"), multi_device),
                    color,
                    dashed,
                    |row| row.speedup,
                ));
            }
            panel
                .series
                .push(theoretical_series(grid_size, processors.as_slice()));

            let file_name =
                super::file_name::file_name(config.output_template(), Some(grid_size), Some(function))?;
            figures.push(Figure::single(file_name, panel));
        }
    }
    Ok(figures)
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

    fn dataset() -> Dataset {
        let mut dataset = Dataset::default();
        dataset.push(
            InputConfig::new(PathBuf::from("results/x86.csv")),
            vec![
                BenchmarkRecord::new("F".to_owned(), 4, 100, 4.0, None),
                BenchmarkRecord::new("F".to_owned(), 1, 100, 10.0, None),
                BenchmarkRecord::new("F".to_owned(), 2, 100, 6.0, None),
            ],
            &[],
        );
        dataset
    }

    #[test]
    fn comparison() {
        let config = ChartConfig::new(ChartKind::Speedup, vec![]);

        let figures = super::build(&config, &dataset()).expect("Always valid");

        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].file_name, "speedup_comparison_grid_100.png");
        let panel = &figures[0].panels[0];
        assert_eq!(panel.x_scale, Scale::Log { base: 2.0 });
        assert_eq!(panel.series.len(), 2);
        let speedups: Vec<f64> = panel.series[0].points.iter().map(|(_, y)| *y).collect();
        assert_eq!(speedups[0], 1.0);
        assert!((speedups[1] - 10.0 / 6.0).abs() < 1e-12);
        assert_eq!(speedups[2], 2.5);

        let theoretical = &panel.series[1];
        assert_eq!(theoretical.label, super::LABEL_THEORETICAL);
        assert!(theoretical.dashed);
        assert_eq!(theoretical.color, None);
        assert_eq!(theoretical.points.len(), 3);
        assert_eq!(theoretical.points[2].0, 4.0);
    }

    #[test]
    fn per_function() {
        let mut config = ChartConfig::new(ChartKind::Speedup, vec![]);
        config.per_function = true;

        let figures = super::build(&config, &dataset()).expect("Always valid");

        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].file_name, "speedup_F_100.png");
        let panel = &figures[0].panels[0];
        assert_eq!(
            panel.title.as_deref(),
            Some("Speedup for F with grid size 100")
        );
        assert_eq!(panel.series[0].label, "F 100");
    }

    #[test]
    fn missing_baseline() {
        let mut dataset = Dataset::default();
        dataset.push(
            InputConfig::new(PathBuf::from("results/x86.csv")),
            vec![BenchmarkRecord::new("F".to_owned(), 2, 100, 6.0, None)],
            &[],
        );

        let mut config = ChartConfig::new(ChartKind::Speedup, vec![]);
        assert!(super::build(&config, &dataset).is_err());

        config.baseline_policy = benchmark_metrics::BaselinePolicy::Skip;
        let figures = super::build(&config, &dataset).expect("Always valid");
        assert!(figures.is_empty());
    }
}

//!
//! Floating-point throughput against processor count.
//!

use crate::config::chart::ChartConfig;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::figure::Figure;

/// Operations per second in one GFLOP/s.
pub const GIGA: f64 = 1.0e9;

///
/// Builds one figure per grid size with a series per function, in GFLOP/s.
///
/// Records without an operation count are left out.
///
pub fn build(config: &ChartConfig, dataset: &Dataset) -> Result<Vec<Figure>, Error> {
    let rows = benchmark_metrics::compute_throughput(dataset.records().cloned());
    super::processor_figures(
        config,
        dataset,
        rows,
        "GFLOP/s",
        |grid| format!("FLOPS Comparison by Function - Grid Size {grid}x{grid}"),
        |row| row.throughput.map(|throughput| throughput / GIGA),
    )
    .map(|figures| figures.into_iter().map(|(_, figure)| figure).collect())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use benchmark_metrics::BenchmarkRecord;

    use crate::config::chart::ChartConfig;
    use crate::config::input::InputConfig;
    use crate::config::kind::ChartKind;
    use crate::dataset::Dataset;

    #[test]
    fn gigaflops() {
        let mut dataset = Dataset::default();
        dataset.push(
            InputConfig::new(PathBuf::from("results/x86.csv")),
            vec![
                BenchmarkRecord::new("jacobi".to_owned(), 1, 1024, 10.0, Some(4.0e10)),
                BenchmarkRecord::new("jacobi".to_owned(), 4, 1024, 4.0, Some(4.0e10)),
                BenchmarkRecord::new("gauss".to_owned(), 1, 1024, 12.0, None),
                BenchmarkRecord::new("gauss".to_owned(), 1, 2048, 40.0, None),
            ],
            &[],
        );
        let config = ChartConfig::new(ChartKind::Throughput, vec![]);

        let figures = super::build(&config, &dataset).expect("Always valid");

        assert_eq!(figures.len(), 1);
        assert_eq!(figures[0].file_name, "flops_comparison_grid_1024.png");
        let panel = &figures[0].panels[0];
        assert_eq!(panel.y_label, "GFLOP/s");
        assert_eq!(panel.series.len(), 1);
        assert_eq!(panel.series[0].label, "jacobi");
        assert_eq!(panel.series[0].color, Some(1));
        assert_eq!(panel.series[0].points, vec![(1.0, 4.0), (4.0, 10.0)]);
    }
}

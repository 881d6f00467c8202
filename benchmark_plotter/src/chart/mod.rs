//!
//! The chart builders, mapping benchmark data onto figures.
//!

pub mod device_comparison;
pub mod file_name;
pub mod speedup;
pub mod throughput;
pub mod time;

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use benchmark_metrics::MetricRow;

use crate::config::chart::ChartConfig;
use crate::config::kind::ChartKind;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::figure::panel::Panel;
use crate::figure::series::Series;
use crate::figure::Figure;

/// The x axis description of the processor count charts.
pub const LABEL_THREADS: &str = "Threads (p)";

///
/// Builds the figures of a chart family.
///
pub fn build(config: &ChartConfig, dataset: &Dataset) -> Result<Vec<Figure>, Error> {
    match config.kind {
        ChartKind::Time => time::build(config, dataset),
        ChartKind::Speedup => speedup::build(config, dataset),
        ChartKind::Throughput => throughput::build(config, dataset),
        ChartKind::DeviceComparison => device_comparison::build(config, dataset),
    }
}

///
/// The metric rows of one function on one device and grid size.
///
#[derive(Debug)]
pub struct Line {
    /// The function name.
    pub function: String,
    /// The device label.
    pub device: Option<String>,
    /// The rows, sorted by processor count.
    pub rows: Vec<MetricRow>,
}

impl Line {
    ///
    /// The legend label, naming the device only when several are plotted.
    ///
    pub fn label(&self, name: String, multi_device: bool) -> String {
        match (multi_device, self.device.as_deref()) {
            (true, Some(device)) => format!("{name} ({device})"),
            _ => name,
        }
    }

    ///
    /// Builds a series of the values against processor count.
    ///
    pub fn series<F>(&self, label: String, color: Option<usize>, dashed: bool, value: F) -> Series
    where
        F: Fn(&MetricRow) -> Option<f64>,
    {
        let points = self
            .rows
            .iter()
            .filter_map(|row| Some((row.record.processors as f64, value(row)?)))
            .collect();
        Series::new(label, points, color).dashed(dashed)
    }
}

///
/// Splits metric rows into lines per grid size.
///
/// Lines are ordered by function, then device.
///
pub fn lines_by_grid<I>(rows: I) -> BTreeMap<u64, Vec<Line>>
where
    I: IntoIterator<Item = MetricRow>,
{
    let mut groups: BTreeMap<(u64, String, Option<String>), Vec<MetricRow>> = BTreeMap::new();
    for row in rows.into_iter() {
        groups
            .entry((
                row.record.grid_size,
                row.record.function.clone(),
                row.record.device_label.clone(),
            ))
            .or_default()
            .push(row);
    }

    let mut lines: BTreeMap<u64, Vec<Line>> = BTreeMap::new();
    for ((grid_size, function, device), mut rows) in groups.into_iter() {
        rows.sort_by_key(|row| row.record.processors);
        lines.entry(grid_size).or_default().push(Line {
            function,
            device,
            rows,
        });
    }
    lines
}

///
/// The sorted distinct processor counts of the lines.
///
pub fn processor_ticks<'a, I>(lines: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a Line>,
{
    lines
        .into_iter()
        .flat_map(|line| line.rows.iter().map(|row| row.record.processors))
        .collect::<BTreeSet<u32>>()
        .into_iter()
        .collect()
}

///
/// Palette indexes of the function names, stable across the figures of a chart.
///
pub fn palette_indexes(functions: Vec<String>) -> BTreeMap<String, usize> {
    functions
        .into_iter()
        .enumerate()
        .map(|(index, function)| (function, index))
        .collect()
}

///
/// Builds one figure per grid size with a series per function and device.
///
/// Grid sizes without a single plottable value yield no figure.
///
pub fn processor_figures<F, T>(
    config: &ChartConfig,
    dataset: &Dataset,
    rows: Vec<MetricRow>,
    y_label: &str,
    default_title: T,
    value: F,
) -> Result<Vec<(u64, Figure)>, Error>
where
    F: Fn(&MetricRow) -> Option<f64>,
    T: Fn(u64) -> String,
{
    let colors = palette_indexes(dataset.functions());
    let multi_device = dataset.is_multi_device();

    let mut figures = Vec::new();
    for (grid_size, lines) in lines_by_grid(rows).into_iter() {
        let title = title(config, default_title(grid_size), Some(grid_size), None)?;
        let mut panel = Panel::new(
            Some(title),
            LABEL_THREADS,
            y_label,
            config.x_scale(),
            config.y_scale(),
        );
        panel.x_ticks = processor_ticks(lines.iter())
            .into_iter()
            .map(f64::from)
            .collect();
        for line in lines.iter() {
            let dashed = line
                .device
                .as_deref()
                .map(|device| dataset.is_dashed(device))
                .unwrap_or_default();
            let series = line.series(
                line.label(line.function.clone(), multi_device),
                colors.get(line.function.as_str()).copied(),
                dashed,
                &value,
            );
            if !series.points.is_empty() {
                panel.series.push(series);
            }
        }
        if panel.is_empty() {
            continue;
        }
        let file_name = file_name::file_name(config.output_template(), Some(grid_size), None)?;
        figures.push((grid_size, Figure::single(file_name, panel)));
    }
    Ok(figures)
}

///
/// The figure title: the configured template if any, the default otherwise.
///
pub fn title(
    config: &ChartConfig,
    default: String,
    grid: Option<u64>,
    function: Option<&str>,
) -> Result<String, Error> {
    match config.title.as_deref() {
        Some(template) => file_name::substitute(template, grid, function),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use benchmark_metrics::BenchmarkRecord;
    use benchmark_metrics::MetricRow;

    fn row(function: &str, processors: u32, grid_size: u64, device: &str) -> MetricRow {
        BenchmarkRecord::new(function.to_owned(), processors, grid_size, 1.0, None)
            .with_device_label(Some(device.to_owned()))
            .into()
    }

    #[test]
    fn lines_by_grid() {
        let rows = vec![
            row("jacobi", 4, 1024, "CPU"),
            row("jacobi", 1, 1024, "CPU"),
            row("gauss", 1, 1024, "CPU"),
            row("jacobi", 1, 2048, "CPU"),
            row("jacobi", 2, 1024, "GPU"),
        ];

        let lines = super::lines_by_grid(rows);

        assert_eq!(lines.len(), 2);
        let grid_1024 = &lines[&1024];
        assert_eq!(grid_1024.len(), 3);
        assert_eq!(grid_1024[0].function, "gauss");
        assert_eq!(grid_1024[1].device.as_deref(), Some("CPU"));
        assert_eq!(
            grid_1024[1]
                .rows
                .iter()
                .map(|row| row.record.processors)
                .collect::<Vec<u32>>(),
            vec![1, 4]
        );
        assert_eq!(super::processor_ticks(grid_1024), vec![1, 2, 4]);
    }

    #[test]
    fn line_label() {
        let lines = super::lines_by_grid(vec![row("jacobi", 1, 1024, "CPU")]);
        let line = &lines[&1024][0];

        assert_eq!(line.label("jacobi".to_owned(), false), "jacobi");
        assert_eq!(line.label("jacobi".to_owned(), true), "jacobi (CPU)");
    }
}

//!
//! The benchmark plotter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark plotter arguments.
///
/// Either a configuration file or a single chart described by flags.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON configuration file listing the charts to draw.
    #[arg(short, long, conflicts_with_all = ["kind", "inputs"])]
    pub config: Option<PathBuf>,

    /// Chart kind: `time`, `speedup`, `throughput`, or `device-comparison`.
    #[arg(short, long, requires = "inputs")]
    pub kind: Option<benchmark_plotter::ChartKind>,

    /// Input CSV files, as `[LABEL=]PATH[@PROCESSORS]`.
    pub inputs: Vec<benchmark_plotter::InputConfig>,

    /// Labels of the inputs drawn with dashed lines.
    #[arg(long, value_delimiter = ',')]
    pub dashed: Vec<String>,

    /// Keeps only these grid sizes.
    #[arg(long, value_delimiter = ',')]
    pub grid_sizes: Vec<u64>,

    /// The x axis scale: `linear`, `log`, `log2`, `log10`, or `log:BASE`.
    #[arg(long)]
    pub x_scale: Option<benchmark_plotter::Scale>,

    /// The y axis scale: `linear`, `log`, `log2`, `log10`, or `log:BASE`.
    #[arg(long)]
    pub y_scale: Option<benchmark_plotter::Scale>,

    /// Output file name template with `{grid}` and `{function}` placeholders.
    #[arg(long)]
    pub output: Option<String>,

    /// Title template overriding the default one.
    #[arg(long)]
    pub title: Option<String>,

    /// Draws one speedup chart per function and grid size.
    #[arg(long)]
    pub per_function: bool,

    /// The number of slowest functions compared across devices.
    #[arg(long, default_value_t = benchmark_plotter::ChartConfig::default_count())]
    pub count: usize,

    /// What to do with groups without exactly one single-processor row: `abort` or `skip`.
    #[arg(long, default_value_t = benchmark_metrics::BaselinePolicy::Abort)]
    pub baseline_policy: benchmark_metrics::BaselinePolicy,

    /// The width of a single panel, in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// The figure height, in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// The directory the charts are written to.
    #[arg(
        short,
        long,
        env = "BENCHMARK_PLOTTER_OUTPUT_DIRECTORY",
        default_value = "results/graphs"
    )]
    pub output_directory: PathBuf,
}

impl Arguments {
    ///
    /// Builds the configuration from the file or from the single chart flags.
    ///
    pub fn config(&self) -> anyhow::Result<benchmark_plotter::Config> {
        if let Some(path) = self.config.as_deref() {
            return Ok(benchmark_plotter::Config::try_from(path)?);
        }

        let kind = match self.kind {
            Some(kind) => kind,
            None => anyhow::bail!("Either a configuration file or a chart kind must be provided."),
        };
        let inputs = self
            .inputs
            .iter()
            .cloned()
            .map(|mut input| {
                input.dashed = self.dashed.contains(&input.label());
                input
            })
            .collect();

        let mut chart = benchmark_plotter::ChartConfig::new(kind, inputs);
        chart.grid_sizes = self.grid_sizes.clone();
        chart.x_scale = self.x_scale;
        chart.y_scale = self.y_scale;
        chart.output = self.output.clone();
        chart.title = self.title.clone();
        chart.per_function = self.per_function;
        chart.count = self.count;
        chart.baseline_policy = self.baseline_policy;
        if let Some(width) = self.width {
            chart.style.width = width;
        }
        if let Some(height) = self.height {
            chart.style.height = height;
        }

        let config = benchmark_plotter::Config::new(vec![chart]);
        config.validate()?;
        Ok(config)
    }
}

//!
//! The benchmark metrics arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark metrics arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input CSV files, as `PATH` or `LABEL=PATH`, where the label names the hardware.
    /// If only one path is provided and it is a directory, all CSV files below it are used.
    pub inputs: Vec<benchmark_metrics::InputSource>,

    /// Fields to group records by: `function`, `grid-size`, `device`, `processors`.
    #[arg(long, value_delimiter = ',', default_values_t = vec![
        benchmark_metrics::KeyField::Function,
        benchmark_metrics::KeyField::GridSize,
        benchmark_metrics::KeyField::Device,
    ])]
    pub group_by: Vec<benchmark_metrics::KeyField>,

    /// What to do with groups without exactly one single-processor row: `abort` or `skip`.
    #[arg(long, default_value_t = benchmark_metrics::BaselinePolicy::Abort)]
    pub baseline_policy: benchmark_metrics::BaselinePolicy,

    /// Keeps only these processor counts.
    #[arg(long, value_delimiter = ',')]
    pub processors: Vec<u32>,

    /// Keeps only these grid sizes.
    #[arg(long, value_delimiter = ',')]
    pub grid_sizes: Vec<u64>,

    /// Keeps only these functions.
    #[arg(long, value_delimiter = ',')]
    pub functions: Vec<String>,

    /// Output format: `json`, `csv`, or `xlsx`.
    #[arg(long, default_value_t = benchmark_metrics::OutputFormat::Json)]
    pub output_format: benchmark_metrics::OutputFormat,

    /// Output file. If unset, the result is printed to `stdout`.
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,
}

impl Arguments {
    ///
    /// Resolves the input sources, expanding a single directory into its CSV files.
    ///
    pub fn sources(&self) -> anyhow::Result<Vec<benchmark_metrics::InputSource>> {
        match self.inputs.as_slice() {
            [] => anyhow::bail!("No input files provided."),
            [source] if source.path.is_dir() => {
                let resolution_pattern = format!("{}/**/*.csv", source.path.to_string_lossy());
                let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
                    .filter_map(Result::ok)
                    .collect();
                paths.sort();
                if paths.is_empty() {
                    anyhow::bail!("No CSV files found in directory {:?}", source.path);
                }
                Ok(paths
                    .into_iter()
                    .map(|path| {
                        benchmark_metrics::InputSource::new(path, source.device_label.clone())
                    })
                    .collect())
            }
            sources => Ok(sources.to_vec()),
        }
    }

    ///
    /// Builds the record filter from the selection arguments.
    ///
    pub fn filter(&self) -> benchmark_metrics::Filter {
        benchmark_metrics::Filter::from_lists(
            self.processors.clone(),
            self.grid_sizes.clone(),
            self.functions.clone(),
        )
    }
}

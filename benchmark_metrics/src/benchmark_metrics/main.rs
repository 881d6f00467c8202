//!
//! The benchmark metrics binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use chrono::Utc;
use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    let start = Utc::now();

    let sources = arguments.sources()?;
    let mut loaded_sources = Vec::with_capacity(sources.len());
    let mut records = Vec::new();
    for source in sources.into_iter() {
        match benchmark_metrics::load(&source) {
            Ok(source_records) => {
                records.extend(source_records);
                loaded_sources.push(source);
            }
            Err(benchmark_metrics::InputError::EmptyFile { path }) => {
                if !arguments.quiet {
                    eprintln!(
                        "{} Input file {path:?} is empty and will be skipped.",
                        "Warning:".bright_yellow()
                    );
                }
                continue;
            }
            Err(error) => Err(error)?,
        }
    }

    let records = arguments.filter().apply(records);
    let deriver =
        benchmark_metrics::MetricsDeriver::new(arguments.group_by.clone(), arguments.baseline_policy);
    let derivation = deriver.derive(records)?;

    if !arguments.quiet {
        benchmark_metrics::Summary::from(&derivation).write_all(&mut std::io::stderr())?;
    }

    let metadata = benchmark_metrics::ReportMetadata {
        start,
        end: Utc::now(),
        inputs: loaded_sources,
        baseline_policy: arguments.baseline_policy,
    };
    let report = benchmark_metrics::Report::new(metadata, derivation);
    let output = benchmark_metrics::Output::try_from((&report, arguments.output_format.clone()))?;
    match arguments.output_path {
        Some(output_path) => output.write_to_file(output_path)?,
        None => output.write_to_stdout()?,
    }

    Ok(())
}

//!
//! The benchmark plotter binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    let config = arguments.config()?;

    std::fs::create_dir_all(arguments.output_directory.as_path()).map_err(|error| {
        anyhow::anyhow!(
            "Output directory {:?} creating: {error}",
            arguments.output_directory
        )
    })?;

    let mut generated = 0;
    for chart in config.charts.iter() {
        let figures = benchmark_plotter::figures(chart)?;
        if figures.is_empty() && !arguments.quiet {
            eprintln!(
                "{} The {} chart has no data to plot.",
                "Warning:".bright_yellow(),
                chart.kind
            );
        }

        for figure in figures.iter() {
            let path = benchmark_plotter::render(
                figure,
                &chart.style,
                arguments.output_directory.as_path(),
            )?;
            generated += 1;
            if !arguments.quiet {
                println!("{} {}", "Generated:".bright_green().bold(), path.display());
            }
        }
    }

    if !arguments.quiet {
        println!(
            "{} {generated} chart(s) saved to {}",
            "Finished:".bright_green().bold(),
            arguments.output_directory.display()
        );
    }

    Ok(())
}

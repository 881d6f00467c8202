//!
//! Terminal summary of derived metrics.
//!

pub mod group;

use colored::Colorize;

use crate::derive::Derivation;

use self::group::Group;

///
/// Terminal summary of derived metrics.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Per-group figures, in key order.
    pub groups: Vec<Group>,
    /// Descriptions of the skipped groups.
    pub skipped: Vec<String>,
}

impl Summary {
    /// Inner width of the summary boxes.
    const WIDTH: usize = 60;

    ///
    /// Writes the summary boxes.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        for group in self.groups.iter() {
            let name = group.name.as_str();
            writeln!(
                w,
                "╔═╡ {} ╞{}╡ {} ╞═╗",
                "Speedup".bright_white(),
                "═".repeat(Self::WIDTH.saturating_sub(16 + name.chars().count())),
                name.bright_white()
            )?;
            writeln!(
                w,
                "║ {:44} {:>12.6} ║",
                "Baseline time (s)".bright_white(),
                group.baseline_time
            )?;
            writeln!(
                w,
                "║ {:44} {:>12} ║",
                format!("Best speedup (p = {})", group.best_processors).bright_white(),
                Self::format_speedup(group.best_speedup)
            )?;
            writeln!(
                w,
                "║ {:44} {:>12} ║",
                "Efficiency at best".bright_white(),
                Self::format_efficiency(group.best_efficiency)
            )?;
            if let Some(throughput) = group.peak_throughput {
                writeln!(
                    w,
                    "║ {:44} {:>12.3} ║",
                    "Peak GFLOP/s".bright_white(),
                    throughput / 1.0e9
                )?;
            }
            writeln!(w, "╚{}╝", "═".repeat(Self::WIDTH))?;
        }

        for skipped in self.skipped.iter() {
            writeln!(w, "{} {skipped}", "Skipped:".bright_yellow())?;
        }

        Ok(())
    }

    ///
    /// Formats and colorizes a speedup value.
    ///
    fn format_speedup(value: f64) -> colored::ColoredString {
        if value > 1.0 {
            format!("{value:.3}x").green()
        } else if value == 1.0 {
            format!("{value:.3}x").white()
        } else {
            format!("{value:.3}x").bright_red()
        }
    }

    ///
    /// Formats and colorizes a parallel efficiency value.
    ///
    fn format_efficiency(value: f64) -> colored::ColoredString {
        let percent = format!("{:.1}%", value * 100.0);
        if value >= 0.75 {
            percent.green()
        } else if value >= 0.5 {
            percent.yellow()
        } else {
            percent.bright_red()
        }
    }
}

impl From<&Derivation> for Summary {
    fn from(derivation: &Derivation) -> Self {
        Self {
            groups: derivation
                .groups
                .iter()
                .filter_map(|(key, rows)| Group::new(key, rows.as_slice()))
                .collect(),
            skipped: derivation
                .skipped
                .iter()
                .map(|error| error.to_string())
                .collect(),
        }
    }
}

//!
//! The chart configuration.
//!

use serde::Deserialize;
use serde::Serialize;

use crate::config::input::InputConfig;
use crate::config::kind::ChartKind;
use crate::config::scale::Scale;
use crate::config::style::Style;
use crate::error::Error;

///
/// The configuration of one chart family.
///
/// A chart family yields one figure per grid size or per function, depending on its kind.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// The chart kind.
    pub kind: ChartKind,
    /// The benchmark tables to plot.
    pub inputs: Vec<InputConfig>,
    /// Keeps only these grid sizes. Empty means all.
    #[serde(default)]
    pub grid_sizes: Vec<u64>,
    /// The x axis scale. Defaults depend on the kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_scale: Option<Scale>,
    /// The y axis scale. Defaults to `log10`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_scale: Option<Scale>,
    /// The output file name template with `{grid}` and `{function}` placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// The output file name of the combined device comparison figure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combined_output: Option<String>,
    /// The title template overriding the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Draws one speedup chart per function and grid size.
    #[serde(default)]
    pub per_function: bool,
    /// The number of slowest functions compared across devices.
    #[serde(default = "ChartConfig::default_count")]
    pub count: usize,
    /// What to do with groups lacking a single-processor baseline.
    #[serde(default)]
    pub baseline_policy: benchmark_metrics::BaselinePolicy,
    /// The chart style.
    #[serde(default)]
    pub style: Style,
}

impl ChartConfig {
    /// The grid size placeholder.
    pub const PLACEHOLDER_GRID: &'static str = "{grid}";
    /// The function name placeholder.
    pub const PLACEHOLDER_FUNCTION: &'static str = "{function}";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(kind: ChartKind, inputs: Vec<InputConfig>) -> Self {
        Self {
            kind,
            inputs,
            grid_sizes: vec![],
            x_scale: None,
            y_scale: None,
            output: None,
            combined_output: None,
            title: None,
            per_function: false,
            count: Self::default_count(),
            baseline_policy: benchmark_metrics::BaselinePolicy::default(),
            style: Style::default(),
        }
    }

    ///
    /// The default number of slowest functions to compare.
    ///
    pub fn default_count() -> usize {
        2
    }

    ///
    /// The x axis scale.
    ///
    pub fn x_scale(&self) -> Scale {
        self.x_scale.unwrap_or(match self.kind {
            ChartKind::Speedup => Scale::Log { base: 2.0 },
            _ => Scale::Linear,
        })
    }

    ///
    /// The y axis scale.
    ///
    pub fn y_scale(&self) -> Scale {
        self.y_scale.unwrap_or(Scale::Log { base: 10.0 })
    }

    ///
    /// The output file name template.
    ///
    pub fn output_template(&self) -> &str {
        match self.output.as_deref() {
            Some(output) => output,
            None => match self.kind {
                ChartKind::Time => "time_vs_processors_grid_{grid}.png",
                ChartKind::Speedup if self.per_function => "speedup_{function}_{grid}.png",
                ChartKind::Speedup => "speedup_comparison_grid_{grid}.png",
                ChartKind::Throughput => "flops_comparison_grid_{grid}.png",
                ChartKind::DeviceComparison => "device_comparison_{function}.png",
            },
        }
    }

    ///
    /// The output file name of the combined device comparison figure.
    ///
    pub fn combined_output_template(&self) -> &str {
        self.combined_output
            .as_deref()
            .unwrap_or("device_comparison_slowest_functions.png")
    }

    ///
    /// The placeholders the output template must contain to keep file names distinct.
    ///
    pub fn required_placeholders(&self) -> Vec<&'static str> {
        match self.kind {
            ChartKind::Time | ChartKind::Throughput => vec![Self::PLACEHOLDER_GRID],
            ChartKind::Speedup if self.per_function => {
                vec![Self::PLACEHOLDER_FUNCTION, Self::PLACEHOLDER_GRID]
            }
            ChartKind::Speedup => vec![Self::PLACEHOLDER_GRID],
            ChartKind::DeviceComparison => vec![Self::PLACEHOLDER_FUNCTION],
        }
    }

    ///
    /// Checks the configuration for inconsistencies.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        let error = |reason: String| Error::Configuration {
            chart: self.kind.to_string(),
            reason,
        };

        if self.inputs.is_empty() {
            return Err(error("no inputs".to_owned()));
        }
        if self.kind == ChartKind::DeviceComparison && self.count == 0 {
            return Err(error("the number of compared functions is zero".to_owned()));
        }
        if self.style.width == 0 || self.style.height == 0 {
            return Err(error(format!(
                "the figure size {}x{} is empty",
                self.style.width, self.style.height
            )));
        }
        let template = self.output_template();
        for placeholder in self.required_placeholders() {
            if !template.contains(placeholder) {
                return Err(error(format!(
                    "the output template `{template}` lacks the `{placeholder}` placeholder"
                )));
            }
        }
        Ok(())
    }
}

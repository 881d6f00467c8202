//!
//! The benchmark plotter error.
//!

use std::path::PathBuf;

///
/// The benchmark plotter error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file cannot be read.
    #[error("Config file {path:?} reading: {error}")]
    ConfigReading {
        /// The underlying error.
        error: std::io::Error,
        /// The configuration file path.
        path: PathBuf,
    },
    /// The configuration file is not valid JSON of the expected shape.
    #[error("Config file {path:?} parsing: {error}")]
    ConfigParsing {
        /// The underlying error.
        error: serde_json::Error,
        /// The configuration file path.
        path: PathBuf,
    },
    /// A chart configuration is inconsistent.
    #[error("Chart `{chart}` configuration: {reason}")]
    Configuration {
        /// The chart description.
        chart: String,
        /// What is wrong.
        reason: String,
    },
    /// An output path template cannot be filled in.
    #[error("Output template `{template}`: {reason}")]
    Template {
        /// The template.
        template: String,
        /// What is wrong.
        reason: String,
    },
    /// The benchmark data cannot be loaded or derived.
    #[error(transparent)]
    Metrics(#[from] benchmark_metrics::Error),
    /// The chart cannot be drawn or written.
    #[error("Chart {path:?} drawing: {message}")]
    Drawing {
        /// The chart file path.
        path: PathBuf,
        /// The backend error message.
        message: String,
    },
}

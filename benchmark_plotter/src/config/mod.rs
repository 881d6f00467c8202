//!
//! The benchmark plotter configuration.
//!

pub mod chart;
pub mod input;
pub mod kind;
pub mod scale;
pub mod style;

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Error;

use self::chart::ChartConfig;

///
/// The benchmark plotter configuration: a list of chart families.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The charts to draw.
    pub charts: Vec<ChartConfig>,
}

impl Config {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(charts: Vec<ChartConfig>) -> Self {
        Self { charts }
    }

    ///
    /// Checks every chart configuration.
    ///
    pub fn validate(&self) -> Result<(), Error> {
        if self.charts.is_empty() {
            return Err(Error::Configuration {
                chart: "<none>".to_owned(),
                reason: "no charts configured".to_owned(),
            });
        }
        for chart in self.charts.iter() {
            chart.validate()?;
        }
        Ok(())
    }
}

impl TryFrom<&Path> for Config {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::ConfigReading {
            error,
            path: path.to_path_buf(),
        })?;
        let config: Self =
            serde_json::from_str(text.as_str()).map_err(|error| Error::ConfigParsing {
                error,
                path: path.to_path_buf(),
            })?;
        config.validate()?;
        Ok(config)
    }
}

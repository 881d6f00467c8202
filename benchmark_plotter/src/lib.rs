//!
//! The benchmark plotter library.
//!

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod figure;
pub mod render;

pub use crate::chart::build;
pub use crate::config::chart::ChartConfig;
pub use crate::config::input::InputConfig;
pub use crate::config::kind::ChartKind;
pub use crate::config::scale::Scale;
pub use crate::config::style::LegendPosition;
pub use crate::config::style::Style;
pub use crate::config::Config;
pub use crate::dataset::Dataset;
pub use crate::error::Error;
pub use crate::figure::panel::Panel;
pub use crate::figure::series::Series;
pub use crate::figure::Figure;
pub use crate::render::render;

///
/// Loads the inputs of a chart family and builds its figures.
///
pub fn figures(config: &ChartConfig) -> Result<Vec<Figure>, Error> {
    let dataset = Dataset::load(config.inputs.as_slice(), config.grid_sizes.as_slice())?;
    build(config, &dataset)
}

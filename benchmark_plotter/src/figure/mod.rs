//!
//! The chart data model, built without drawing.
//!

pub mod panel;
pub mod series;

use self::panel::Panel;

///
/// An image file with one or more panels side by side.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// The output file name, relative to the output directory.
    pub file_name: String,
    /// The overall title of a multi-panel figure.
    pub title: Option<String>,
    /// The panels, left to right.
    pub panels: Vec<Panel>,
}

impl Figure {
    ///
    /// A shortcut constructor for a single-panel figure.
    ///
    pub fn single(file_name: String, panel: Panel) -> Self {
        Self {
            file_name,
            title: None,
            panels: vec![panel],
        }
    }

    ///
    /// A shortcut constructor for a multi-panel figure.
    ///
    pub fn multiple(file_name: String, title: String, panels: Vec<Panel>) -> Self {
        Self {
            file_name,
            title: Some(title),
            panels,
        }
    }

    ///
    /// The total number of series across panels.
    ///
    pub fn series_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.series.len()).sum()
    }
}

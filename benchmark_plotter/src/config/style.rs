//!
//! The chart style.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The chart style, passed explicitly into every render.
///
/// Sizes are in pixels.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// The width of a single panel.
    pub width: u32,
    /// The height of the figure.
    pub height: u32,
    /// The figure title font size of multi-panel figures.
    pub figure_title_font_size: u32,
    /// The panel title font size.
    pub title_font_size: u32,
    /// The axis description font size.
    pub label_font_size: u32,
    /// The tick label font size.
    pub tick_font_size: u32,
    /// The legend font size.
    pub legend_font_size: u32,
    /// The series line width.
    pub line_width: u32,
    /// The series marker radius.
    pub marker_size: u32,
    /// The dash length of dashed series.
    pub dash_size: u32,
    /// The gap between dashes of dashed series.
    pub dash_gap: u32,
    /// The margin around each panel.
    pub margin: u32,
    /// The space reserved for tick labels and axis descriptions.
    pub label_area_size: u32,
    /// The legend placement.
    pub legend: LegendPosition,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 1000,
            figure_title_font_size: 32,
            title_font_size: 28,
            label_font_size: 24,
            tick_font_size: 18,
            legend_font_size: 16,
            line_width: 2,
            marker_size: 6,
            dash_size: 12,
            dash_gap: 8,
            margin: 30,
            label_area_size: 90,
            legend: LegendPosition::default(),
        }
    }
}

///
/// The legend placement inside a panel.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegendPosition {
    /// Top left corner.
    #[default]
    UpperLeft,
    /// Top right corner.
    UpperRight,
    /// Bottom left corner.
    LowerLeft,
    /// Bottom right corner.
    LowerRight,
    /// Middle of the right edge.
    MiddleRight,
}

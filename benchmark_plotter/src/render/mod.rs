//!
//! Drawing figures into PNG files.
//!

pub mod axis;
pub mod palette;

use std::path::Path;
use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::config::style::LegendPosition;
use crate::config::style::Style;
use crate::error::Error;
use crate::figure::panel::Panel;
use crate::figure::series::Marker;
use crate::figure::Figure;

/// The font family of all texts.
pub const FONT: &str = "sans-serif";

///
/// Draws the figure into its file in the output directory.
///
/// Multi-panel figures are one panel width per panel wide.
///
pub fn render(figure: &Figure, style: &Style, directory: &Path) -> Result<PathBuf, Error> {
    let path = directory.join(figure.file_name.as_str());
    let panels = figure.panels.len().max(1) as u32;
    let size = (style.width.saturating_mul(panels), style.height);

    {
        let root = BitMapBackend::new(path.as_path(), size).into_drawing_area();
        draw(&root, figure, style).map_err(|error| Error::Drawing {
            path: path.clone(),
            message: error.to_string(),
        })?;
    }
    Ok(path)
}

///
/// Draws the figure onto a drawing area.
///
pub fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    style: &Style,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;
    let area = match figure.title.as_deref() {
        Some(title) => root.titled(title, (FONT, f64::from(style.figure_title_font_size)))?,
        None => root.clone(),
    };
    let areas = area.split_evenly((1, figure.panels.len().max(1)));
    for (area, panel) in areas.iter().zip(figure.panels.iter()) {
        draw_panel(area, panel, style)?;
    }
    root.present()?;
    Ok(())
}

///
/// Draws a panel: mesh, series, markers, and legend.
///
fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    style: &Style,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    let (x_range, y_range) = panel.bounds();
    let x_keys = axis::key_points(panel.x_scale, panel.x_ticks.as_slice(), &x_range);

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(style.margin)
        .x_label_area_size(style.label_area_size)
        .y_label_area_size(style.label_area_size);
    if let Some(title) = panel.title.as_deref() {
        builder.caption(title, (FONT, f64::from(style.title_font_size)));
    }
    let mut chart = builder.build_cartesian_2d(x_range.with_key_points(x_keys), y_range)?;

    let x_scale = panel.x_scale;
    let y_scale = panel.y_scale;
    let x_formatter = |coordinate: &f64| axis::format_tick(x_scale, *coordinate);
    let y_formatter = |coordinate: &f64| axis::format_tick(y_scale, *coordinate);
    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .y_labels(axis::MAX_LABELS)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style((FONT, f64::from(style.tick_font_size)))
        .axis_desc_style((FONT, f64::from(style.label_font_size)))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.2))
        .draw()?;

    for series in panel.series.iter() {
        let points = panel.projected(series);
        if points.is_empty() {
            continue;
        }
        let color = palette::color(series.color);
        let line_style = color.stroke_width(style.line_width);
        let legend_width = style.line_width;

        let annotation = if series.dashed {
            chart.draw_series(DashedLineSeries::new(
                points.clone(),
                style.dash_size,
                style.dash_gap,
                line_style,
            ))?
        } else {
            chart.draw_series(LineSeries::new(points.clone(), line_style))?
        };
        annotation
            .label(series.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(legend_width))
            });

        let size = style.marker_size;
        match series.marker {
            Some(Marker::Circle) => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|point| Circle::new(*point, size, color.filled())),
                )?;
            }
            Some(Marker::Square) => {
                let half = size as i32;
                chart.draw_series(points.iter().map(|point| {
                    EmptyElement::at(*point)
                        + Rectangle::new([(-half, -half), (half, half)], color.filled())
                }))?;
            }
            Some(Marker::Triangle) => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|point| TriangleMarker::new(*point, size, color.filled())),
                )?;
            }
            Some(Marker::Cross) => {
                chart.draw_series(points.iter().map(|point| {
                    Cross::new(*point, size, color.stroke_width(style.line_width))
                }))?;
            }
            None => {}
        }
    }

    chart
        .configure_series_labels()
        .position(legend_position(style.legend))
        .label_font((FONT, f64::from(style.legend_font_size)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

///
/// Maps the configured legend placement onto the drawing library's one.
///
fn legend_position(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        LegendPosition::MiddleRight => SeriesLabelPosition::MiddleRight,
    }
}

//!
//! A chart panel.
//!

use std::ops::Range;

use crate::config::scale::Scale;
use crate::figure::series::Series;

///
/// A single pair of axes with its series.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// The panel title.
    pub title: Option<String>,
    /// The x axis description.
    pub x_label: String,
    /// The y axis description.
    pub y_label: String,
    /// The x axis scale.
    pub x_scale: Scale,
    /// The y axis scale.
    pub y_scale: Scale,
    /// The x values the axis is labeled at, ascending.
    pub x_ticks: Vec<f64>,
    /// The series, in legend order.
    pub series: Vec<Series>,
}

impl Panel {
    /// The share of the data span added on each side of an axis.
    pub const PADDING: f64 = 0.05;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        title: Option<String>,
        x_label: &str,
        y_label: &str,
        x_scale: Scale,
        y_scale: Scale,
    ) -> Self {
        Self {
            title,
            x_label: x_label.to_owned(),
            y_label: y_label.to_owned(),
            x_scale,
            y_scale,
            x_ticks: vec![],
            series: vec![],
        }
    }

    ///
    /// The series points mapped into the plotting space.
    ///
    /// Points a logarithmic axis cannot show are dropped.
    ///
    pub fn projected(&self, series: &Series) -> Vec<(f64, f64)> {
        series
            .points
            .iter()
            .filter_map(|(x, y)| Some((self.x_scale.forward(*x)?, self.y_scale.forward(*y)?)))
            .collect()
    }

    ///
    /// The axis ranges in the plotting space, padded around the data.
    ///
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let points: Vec<(f64, f64)> = self
            .series
            .iter()
            .flat_map(|series| self.projected(series))
            .collect();
        let x = Self::padded(points.iter().map(|(x, _)| *x));
        let y = Self::padded(points.iter().map(|(_, y)| *y));
        (x, y)
    }

    ///
    /// Whether the panel has anything to draw.
    ///
    pub fn is_empty(&self) -> bool {
        self.series
            .iter()
            .all(|series| self.projected(series).is_empty())
    }

    ///
    /// The padded range of the values, or `0..1` if there are none.
    ///
    fn padded(values: impl Iterator<Item = f64>) -> Range<f64> {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
        if min > max {
            return 0.0..1.0;
        }
        let padding = if max > min {
            (max - min) * Self::PADDING
        } else {
            0.5
        };
        (min - padding)..(max + padding)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::scale::Scale;
    use crate::figure::series::Series;

    use super::Panel;

    fn panel(points: Vec<(f64, f64)>) -> Panel {
        let mut panel = Panel::new(
            None,
            "Threads (p)",
            "Speedup",
            Scale::Log { base: 2.0 },
            Scale::Log { base: 10.0 },
        );
        panel
            .series
            .push(Series::new("jacobi".to_owned(), points, Some(0)));
        panel
    }

    #[test]
    fn projected_drops_non_positive() {
        let panel = panel(vec![(1.0, 1.0), (2.0, 0.0), (4.0, 100.0)]);

        assert_eq!(
            panel.projected(&panel.series[0]),
            vec![(0.0, 0.0), (2.0, 2.0)]
        );
    }

    #[test]
    fn bounds_padded() {
        let panel = panel(vec![(1.0, 1.0), (4.0, 100.0)]);

        let (x, y) = panel.bounds();

        assert!((x.start + 0.1).abs() < 1e-9);
        assert!((x.end - 2.1).abs() < 1e-9);
        assert!((y.start + 0.1).abs() < 1e-9);
        assert!((y.end - 2.1).abs() < 1e-9);
    }

    #[test]
    fn bounds_single_point() {
        let panel = panel(vec![(2.0, 10.0)]);

        let (x, y) = panel.bounds();

        assert_eq!(x, 0.5..1.5);
        assert_eq!(y, 0.5..1.5);
    }

    #[test]
    fn empty() {
        let panel = panel(vec![(0.0, 1.0)]);

        assert!(panel.is_empty());
        assert_eq!(panel.bounds(), (0.0..1.0, 0.0..1.0));
    }
}

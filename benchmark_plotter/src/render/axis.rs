//!
//! Axis ticks and their labels.
//!

use std::ops::Range;

use crate::config::scale::Scale;

/// The most tick labels drawn on an axis.
pub const MAX_LABELS: usize = 12;

/// The number of evenly spaced ticks of an axis without usable data ticks.
pub const FALLBACK_KEY_POINTS: usize = 6;

///
/// The plotting space coordinates the x axis is labeled at.
///
/// The data ticks are projected through the scale, and those outside the
/// drawn range are dropped. An axis left without ticks is split evenly.
///
pub fn key_points(scale: Scale, ticks: &[f64], range: &Range<f64>) -> Vec<f64> {
    let points: Vec<f64> = ticks
        .iter()
        .filter_map(|tick| scale.forward(*tick))
        .filter(|coordinate| range.contains(coordinate))
        .collect();
    if !points.is_empty() {
        return points;
    }

    let step = (range.end - range.start) / (FALLBACK_KEY_POINTS - 1) as f64;
    (0..FALLBACK_KEY_POINTS)
        .map(|index| range.start + step * index as f64)
        .collect()
}

///
/// Formats the label of a plotting space coordinate in data units.
///
pub fn format_tick(scale: Scale, coordinate: f64) -> String {
    let value = scale.inverse(coordinate);
    let magnitude = value.abs();
    if magnitude == 0.0 {
        "0".to_owned()
    } else if !(1.0e-3..1.0e6).contains(&magnitude) {
        format!("{value:.0e}")
    } else if (value - value.round()).abs() < 1.0e-9 * magnitude.max(1.0) {
        format!("{}", value.round() as i64)
    } else if magnitude >= 10.0 {
        format!("{value:.1}")
    } else {
        let text = format!("{value:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

//!
//! A chart series.
//!

///
/// The shape drawn at every data point of a series.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// A filled circle.
    Circle,
    /// A filled square.
    Square,
    /// A filled upward triangle.
    Triangle,
    /// A diagonal cross.
    Cross,
}

impl Marker {
    /// The shapes series cycle through.
    pub const ALL: [Self; 4] = [Self::Circle, Self::Square, Self::Triangle, Self::Cross];

    ///
    /// The shape of the series with the given index.
    ///
    pub fn cycle(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }
}

///
/// A polyline of data points with its legend entry.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// The legend label.
    pub label: String,
    /// The data points, in drawing order.
    pub points: Vec<(f64, f64)>,
    /// The palette index. `None` draws the series in black.
    pub color: Option<usize>,
    /// Whether the line is dashed.
    pub dashed: bool,
    /// The data point marker. `None` draws the bare line.
    pub marker: Option<Marker>,
}

impl Series {
    ///
    /// A shortcut constructor for a solid series with circle markers.
    ///
    pub fn new(label: String, points: Vec<(f64, f64)>, color: Option<usize>) -> Self {
        Self {
            label,
            points,
            color,
            dashed: false,
            marker: Some(Marker::Circle),
        }
    }

    ///
    /// Switches the line to dashed.
    ///
    pub fn dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }

    ///
    /// Sets the data point marker.
    ///
    pub fn marker(mut self, marker: Option<Marker>) -> Self {
        self.marker = marker;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Marker;

    #[test]
    fn marker_cycle() {
        assert_eq!(Marker::cycle(0), Marker::Circle);
        assert_eq!(Marker::cycle(3), Marker::Cross);
        assert_eq!(Marker::cycle(5), Marker::Square);
    }
}

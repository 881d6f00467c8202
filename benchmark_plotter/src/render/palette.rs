//!
//! The series color palette.
//!

use plotters::style::RGBColor;
use plotters::style::BLACK;

/// The ten categorical colors series cycle through.
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

///
/// The color of a palette index, black if there is none.
///
pub fn color(index: Option<usize>) -> RGBColor {
    match index {
        Some(index) => TAB10[index % TAB10.len()],
        None => BLACK,
    }
}

#[cfg(test)]
mod tests {
    use plotters::style::BLACK;

    #[test]
    fn wraps_around() {
        assert_eq!(super::color(Some(10)), super::TAB10[0]);
        assert_eq!(super::color(Some(3)), super::TAB10[3]);
        assert_eq!(super::color(None), BLACK);
    }
}

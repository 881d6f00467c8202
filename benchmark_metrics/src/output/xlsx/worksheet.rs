//!
//! XLSX worksheet for metric data.
//!

use std::collections::HashMap;

///
/// XLSX worksheet for metric data.
///
/// Rows are benchmark series, columns are processor counts.
///
#[derive(Default)]
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// Series row indexes in the worksheet.
    pub rows: HashMap<String, u32>,
    /// Header names and their column widths.
    pub headers: Vec<(&'static str, usize)>,
    /// Number of value columns written so far.
    pub value_columns: u16,
}

impl Worksheet {
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, headers: Vec<(&'static str, usize)>) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in headers.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                *header_name,
                &Self::worksheet_caption_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }

        Ok(Self {
            worksheet,
            rows: HashMap::new(),
            headers,
            value_columns: 0,
        })
    }

    ///
    /// Writes the header of a processor count column.
    ///
    pub fn add_processors_column(&mut self, processors: u32, column_id: u16) -> anyhow::Result<()> {
        let column_index = (self.headers.len() as u16) + column_id;
        self.worksheet
            .set_column_width(column_index, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            0,
            column_index,
            format!("p = {processors}"),
            &Self::column_header_format(),
        )?;
        self.value_columns = self.value_columns.max(column_id + 1);
        Ok(())
    }

    ///
    /// Adds a new row for a series if needed, and writes a value.
    ///
    pub fn write_series_value(
        &mut self,
        device: &str,
        function: &str,
        grid_size: u64,
        column_id: u16,
        value: f64,
    ) -> anyhow::Result<()> {
        let row_identifier = format!("{device}/{function}/{grid_size}");
        let row_index = if let Some(index) = self.rows.get(row_identifier.as_str()) {
            *index
        } else {
            let row_index = (self.rows.len() as u32) + 1;
            self.rows.insert(row_identifier, row_index);

            self.worksheet
                .write_with_format(row_index, 0, device, &Self::row_header_format())?;
            self.worksheet
                .write_with_format(row_index, 1, function, &Self::row_header_format())?;
            self.worksheet.write_with_format(
                row_index,
                2,
                grid_size as f64,
                &Self::row_header_format(),
            )?;

            row_index
        };

        self.worksheet.write_with_format(
            row_index,
            (self.headers.len() as u16) + column_id,
            value,
            &Self::value_format(),
        )?;
        Ok(())
    }

    ///
    /// Writes a median row below the data.
    ///
    pub fn set_medians(&mut self) -> anyhow::Result<()> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let last_data_row_index = self.rows.len() + 1;
        let median_row_index = last_data_row_index as u32;

        for column_index in 0..self.headers.len() {
            let caption = if column_index == self.headers.len() - 1 {
                "Median"
            } else {
                ""
            };
            self.worksheet.write_with_format(
                median_row_index,
                column_index as u16,
                caption,
                &Self::row_header_summary_format(),
            )?;
        }

        for column_id in 0..self.value_columns {
            let column_index = (self.headers.len() as u16) + column_id;
            let column_name = Self::column_identifier(column_index);
            let formula = format!(
                r#"=IF(COUNT({column_name}2:{column_name}{last_data_row_index})=0, "", MEDIAN({column_name}2:{column_name}{last_data_row_index}))"#
            );
            self.worksheet.write_formula_with_format(
                median_row_index,
                column_index,
                formula.as_str(),
                &Self::value_format(),
            )?;
        }

        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the alphabetical column identifier of a zero-based column index.
    ///
    pub fn column_identifier(index: u16) -> String {
        let mut identifier = String::new();
        let mut number = (index as u32) + 1;

        while number > 0 {
            let remainder = (number - 1) % 26;
            identifier.insert(0, (b'A' + remainder as u8) as char);
            number = (number - 1) / 26;
        }

        identifier
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color("#FFFFFF")
            .set_background_color("#4C6EF5")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::VerticalCenter)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#EEF3FF")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#DDE6FF")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
            .set_border(rust_xlsxwriter::FormatBorder::None)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_summary_format() -> rust_xlsxwriter::Format {
        Self::row_header_format()
            .set_bold()
            .set_align(rust_xlsxwriter::FormatAlign::Right)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_background_color("#FFFFFF")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_border(rust_xlsxwriter::FormatBorder::None)
            .set_num_format("0.000")
    }
}

#[cfg(test)]
mod tests {
    use super::Worksheet;

    #[test]
    fn column_identifier() {
        assert_eq!(Worksheet::column_identifier(0), "A");
        assert_eq!(Worksheet::column_identifier(3), "D");
        assert_eq!(Worksheet::column_identifier(25), "Z");
        assert_eq!(Worksheet::column_identifier(26), "AA");
        assert_eq!(Worksheet::column_identifier(27), "AB");
        assert_eq!(Worksheet::column_identifier(701), "ZZ");
        assert_eq!(Worksheet::column_identifier(702), "AAA");
    }
}

//!
//! Derived metrics output.
//!

pub mod csv;
pub mod format;
pub mod json;
pub mod report;
pub mod xlsx;

use std::io::Write;
use std::path::PathBuf;

use self::csv::Csv;
use self::format::Format;
use self::json::Json;
use self::report::Report;
use self::xlsx::Xlsx;

///
/// Serialized derived metrics.
///
pub enum Output {
    /// A single text file.
    SingleFile(String),
    /// A single spreadsheet file.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the output to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|error| anyhow::anyhow!("Output directory {parent:?} creating: {error}"))?;
        }
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }

    ///
    /// Writes a text output to the standard output.
    ///
    pub fn write_to_stdout(self) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                let mut stdout = std::io::stdout();
                stdout.write_all(content.as_bytes())?;
                if !content.ends_with('\n') {
                    writeln!(stdout)?;
                }
                Ok(())
            }
            Output::SingleFileXlsx(_) => {
                anyhow::bail!("Spreadsheet output requires an output path")
            }
        }
    }
}

impl TryFrom<(&Report, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, format): (&Report, Format)) -> Result<Self, Self::Error> {
        Ok(match format {
            Format::Json => Json::try_from(report)?.into(),
            Format::Csv => Csv::try_from(report)?.into(),
            Format::Xlsx => Xlsx::try_from(report)?.into(),
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}

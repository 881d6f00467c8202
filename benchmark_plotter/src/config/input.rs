//!
//! The chart input.
//!

use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

///
/// A benchmark table plotted by a chart.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// The table file path.
    pub path: PathBuf,
    /// The device label. Defaults to the file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Keeps only the rows measured with this processor count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processors: Option<u32>,
    /// Draws the series of this input with a dashed line.
    #[serde(default)]
    pub dashed: bool,
}

impl InputConfig {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            label: None,
            processors: None,
            dashed: false,
        }
    }

    ///
    /// The device label, falling back to the file stem.
    ///
    pub fn label(&self) -> String {
        match self.label.as_deref() {
            Some(label) => label.to_owned(),
            None => self
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.to_string_lossy().into_owned()),
        }
    }
}

impl std::str::FromStr for InputConfig {
    type Err = anyhow::Error;

    ///
    /// Parses `[LABEL=]PATH[@PROCESSORS]`.
    ///
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (label, rest) = match string.split_once('=') {
            Some((label, rest)) => (Some(label.trim().to_owned()), rest.trim()),
            None => (None, string.trim()),
        };
        let (path, processors) = match rest.rsplit_once('@') {
            Some((path, processors)) => match processors.parse::<u32>() {
                Ok(processors) => (path, Some(processors)),
                Err(_) => (rest, None),
            },
            None => (rest, None),
        };
        if path.is_empty() {
            anyhow::bail!("Chart input `{string}` has an empty path");
        }
        if label.as_deref() == Some("") {
            anyhow::bail!("Chart input `{string}` has an empty label");
        }
        if processors == Some(0) {
            anyhow::bail!("Chart input `{string}` selects zero processors");
        }
        Ok(Self {
            path: PathBuf::from(path),
            label,
            processors,
            dashed: false,
        })
    }
}

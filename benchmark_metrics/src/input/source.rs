//!
//! Benchmark input source.
//!

use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

///
/// Benchmark input source: a table file and the hardware it was measured on.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// The table file path.
    pub path: PathBuf,
    /// The hardware label attached to every record of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_label: Option<String>,
}

impl Source {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, device_label: Option<String>) -> Self {
        Self { path, device_label }
    }
}

impl std::str::FromStr for Source {
    type Err = anyhow::Error;

    ///
    /// Parses `PATH` or `LABEL=PATH`.
    ///
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let (device_label, path) = match string.split_once('=') {
            Some((label, path)) => (Some(label.trim().to_owned()), path.trim()),
            None => (None, string.trim()),
        };
        if path.is_empty() {
            anyhow::bail!("Input source `{string}` has an empty path");
        }
        if device_label.as_deref() == Some("") {
            anyhow::bail!("Input source `{string}` has an empty device label");
        }
        Ok(Self::new(PathBuf::from(path), device_label))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.device_label.as_deref() {
            Some(label) => write!(f, "{label}={}", self.path.display()),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

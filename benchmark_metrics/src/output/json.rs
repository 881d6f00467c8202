//!
//! JSON output.
//!

use crate::output::report::Report;

///
/// Pretty-printed JSON report.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl TryFrom<&Report> for Json {
    type Error = serde_json::Error;

    fn try_from(report: &Report) -> Result<Self, Self::Error> {
        let content = serde_json::to_string_pretty(report)?;
        Ok(Self { content })
    }
}

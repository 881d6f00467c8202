//!
//! Missing baseline handling policy.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// What to do with a group whose speedup baseline is missing or ambiguous.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselinePolicy {
    /// Fail the whole derivation on the first such group.
    #[default]
    Abort,
    /// Report the group and continue with the remaining ones.
    Skip,
}

impl std::str::FromStr for BaselinePolicy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            string => anyhow::bail!(
                "Unknown baseline policy `{string}`. Supported policies: {}",
                vec![Self::Abort, Self::Skip]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for BaselinePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

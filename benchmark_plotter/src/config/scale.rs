//!
//! The axis scale.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The axis scale.
///
/// Written as `linear`, `log` (base 10), `log2`, `log10`, or `log:BASE`.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Scale {
    /// Values are plotted as is.
    Linear,
    /// Values are plotted by their logarithm.
    Log {
        /// The logarithm base.
        base: f64,
    },
}

impl Scale {
    ///
    /// Maps a value into the plotting space.
    ///
    /// Returns `None` for values a logarithmic axis cannot show.
    ///
    pub fn forward(&self, value: f64) -> Option<f64> {
        match self {
            Self::Linear if value.is_finite() => Some(value),
            Self::Log { base } if value.is_finite() && value > 0.0 => Some(if *base == 2.0 {
                value.log2()
            } else if *base == 10.0 {
                value.log10()
            } else {
                value.log(*base)
            }),
            _ => None,
        }
    }

    ///
    /// Maps a plotting space coordinate back to a value.
    ///
    pub fn inverse(&self, coordinate: f64) -> f64 {
        match self {
            Self::Linear => coordinate,
            Self::Log { base } => base.powf(coordinate),
        }
    }

    ///
    /// Whether the scale is logarithmic.
    ///
    pub fn is_log(&self) -> bool {
        matches!(self, Self::Log { .. })
    }
}

impl std::str::FromStr for Scale {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim().to_lowercase();
        let base = match string.as_str() {
            "linear" => return Ok(Self::Linear),
            "log" | "log10" => 10.0,
            "log2" => 2.0,
            other => match other.strip_prefix("log:") {
                Some(base) => base
                    .parse::<f64>()
                    .map_err(|error| anyhow::anyhow!("Invalid logarithm base `{base}`: {error}"))?,
                None => anyhow::bail!(
                    "Unknown scale `{other}`. Supported scales: linear, log, log2, log10, log:BASE"
                ),
            },
        };
        if !base.is_finite() || base <= 0.0 || base == 1.0 {
            anyhow::bail!("Invalid logarithm base `{base}`");
        }
        Ok(Self::Log { base })
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Log { base } if *base == 10.0 => write!(f, "log10"),
            Self::Log { base } if *base == 2.0 => write!(f, "log2"),
            Self::Log { base } => write!(f, "log:{base}"),
        }
    }
}

impl TryFrom<String> for Scale {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Scale> for String {
    fn from(scale: Scale) -> Self {
        scale.to_string()
    }
}

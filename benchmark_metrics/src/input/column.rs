//!
//! Benchmark table column.
//!

///
/// Benchmark table column.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// The benchmarked routine name.
    Function,
    /// The processor count.
    Processors,
    /// The elapsed time in seconds.
    Time,
    /// The problem size.
    GridSize,
    /// The floating-point operation count.
    Flops,
}

impl Column {
    /// Columns every input table must have.
    pub const REQUIRED: [Self; 4] = [Self::Function, Self::Processors, Self::Time, Self::GridSize];

    ///
    /// The header name as it appears in input tables.
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Self::Function => "FUNCTION",
            Self::Processors => "PROCESSORS",
            Self::Time => "TIME",
            Self::GridSize => "GRIDSIZE",
            Self::Flops => "FLOPS",
        }
    }

    ///
    /// Whether a header cell names this column.
    ///
    /// Surrounding whitespace and ASCII case are ignored.
    ///
    pub fn matches(&self, header: &str) -> bool {
        header.trim().eq_ignore_ascii_case(self.name())
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

//!
//! Metric derivation errors.
//!

use crate::model::key::Key;

///
/// Metric derivation error.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The group has no single-processor row, or more than one.
    #[error("Group {key}: expected exactly one baseline row with 1 processor, found {found}")]
    BaselineMissing {
        /// The offending group.
        key: Key,
        /// The number of single-processor rows in the group.
        found: usize,
    },
}

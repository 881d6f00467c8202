//!
//! The benchmark metrics error.
//!

use crate::derive::error::Error as DeriveError;
use crate::input::error::Error as InputError;

///
/// The benchmark metrics error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loading a benchmark table failed.
    #[error(transparent)]
    Input(#[from] InputError),
    /// Deriving metrics failed.
    #[error(transparent)]
    Derive(#[from] DeriveError),
}

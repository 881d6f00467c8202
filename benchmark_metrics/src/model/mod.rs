//!
//! The benchmark data model.
//!

pub mod key;
pub mod metric_row;
pub mod record;

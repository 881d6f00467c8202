//!
//! The benchmark metrics library.
//!

pub mod derive;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod select;
pub mod summary;

pub use crate::derive::compute_speedup;
pub use crate::derive::compute_throughput;
pub use crate::derive::error::Error as DeriveError;
pub use crate::derive::group_by;
pub use crate::derive::policy::BaselinePolicy;
pub use crate::derive::theoretical::scale as theoretical_speedup_scale;
pub use crate::derive::theoretical::theoretical_speedup_curve;
pub use crate::derive::Derivation;
pub use crate::derive::MetricsDeriver;
pub use crate::error::Error;
pub use crate::input::column::Column;
pub use crate::input::error::Error as InputError;
pub use crate::input::load;
pub use crate::input::load_from_reader;
pub use crate::input::source::Source as InputSource;
pub use crate::model::key::field::Field as KeyField;
pub use crate::model::key::value::Value as KeyValue;
pub use crate::model::key::Key as GroupKey;
pub use crate::model::metric_row::MetricRow;
pub use crate::model::record::BenchmarkRecord;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::report::Metadata as ReportMetadata;
pub use crate::output::report::Report;
pub use crate::output::Output;
pub use crate::select::ranking::rank_slowest;
pub use crate::select::Filter;
pub use crate::summary::Summary;

///
/// Loads every source and derives the metric rows of their combined records.
///
pub fn load_and_derive(
    sources: &[InputSource],
    filter: &Filter,
    deriver: &MetricsDeriver,
) -> Result<Derivation, Error> {
    let mut records = Vec::new();
    for source in sources.iter() {
        records.extend(load(source)?);
    }
    Ok(deriver.derive(filter.apply(records))?)
}

//! Service layer: pure, read-only queries over the canonical dataset.
//!
//! Every function here takes the [`crate::models::YieldDataset`] by
//! reference and has no side effects, so concurrent callers need no
//! coordination.

pub mod lookup;
pub mod trends;
pub mod vocabulary;


pub use lookup::{lookup, LabeledMetric, LookupResult, LookupStatus, HISTORICAL_YEAR_MAX};
pub use trends::{yield_trend, TrendPoint};
pub use vocabulary::{crop_options, state_options, year_options, YEAR_MAX, YEAR_MIN};

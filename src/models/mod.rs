//! Domain types for the canonical agricultural datasets.
//!
//! The raw CSV inputs are normalized once at load time into the record types
//! defined here; everything downstream (services, HTTP layer) works on these
//! canonical representations.

pub mod crops;
pub mod dataset;
pub mod records;

pub use crops::prediction_crop_name;
pub use dataset::YieldDataset;
pub use records::{DataSource, HistoricalRecord, PredictionRecord};

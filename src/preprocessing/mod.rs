//! Dataset loading, schema validation, and normalization pipeline.
//!
//! The pipeline here is the only writer the canonical tables ever see: it
//! runs once at startup, validates both raw tables eagerly, and hands back an
//! immutable [`crate::models::YieldDataset`]. Malformed source data aborts
//! the load; per-row problems (unparseable dates) are isolated to the row.

pub mod error;
pub mod pipeline;
pub mod validator;

pub use error::DataLoadError;
pub use pipeline::{load_dataset, load_dataset_from_frames, LoadReport, PipelineResult};

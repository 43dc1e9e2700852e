//! Error types for dataset loading.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal load-time failure: the canonical tables cannot be built.
///
/// Any of these aborts startup; there is no partial or degraded load.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The source file is missing or could not be parsed into tabular form.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// A table lacks columns the normalizer requires.
    #[error("{table} table is missing required columns: {columns:?}")]
    MissingColumns {
        table: &'static str,
        columns: Vec<String>,
    },

    /// Column-level failure during normalization or conversion.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

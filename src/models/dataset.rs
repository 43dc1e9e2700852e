//! The canonical in-memory dataset shared by all queries.

use serde::{Deserialize, Serialize};

use super::records::{HistoricalRecord, PredictionRecord};

/// Both canonical tables, built once at startup and immutable thereafter.
///
/// Query operations take this by reference; the HTTP layer wraps it in an
/// `Arc` so concurrent read-only access needs no coordination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldDataset {
    /// Canonical historical observations table
    pub historical: Vec<HistoricalRecord>,
    /// Canonical future-predictions table
    pub predictions: Vec<PredictionRecord>,
}

impl YieldDataset {
    pub fn new(historical: Vec<HistoricalRecord>, predictions: Vec<PredictionRecord>) -> Self {
        Self {
            historical,
            predictions,
        }
    }
}

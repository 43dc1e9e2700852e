//! Application state for the HTTP server.

use std::sync::Arc;

use crate::models::YieldDataset;
use crate::preprocessing::LoadReport;

/// Shared application state passed to all handlers.
///
/// The canonical dataset is built once at startup and never mutated, so
/// handlers share it through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Canonical tables for all queries
    pub dataset: Arc<YieldDataset>,
    /// Statistics from the startup load
    pub report: Arc<LoadReport>,
}

impl AppState {
    /// Create a new application state from a pipeline run.
    pub fn new(dataset: YieldDataset, report: LoadReport) -> Self {
        Self {
            dataset: Arc::new(dataset),
            report: Arc::new(report),
        }
    }
}

//! Data Transfer Objects for the HTTP API.
//!
//! The service-layer result types already derive `Serialize` and are reused
//! directly; this module adds the request/query shapes and the thin response
//! wrappers the frontend consumes.

use serde::{Deserialize, Serialize};

use crate::models::records::DataSource;
use crate::services::lookup::{LookupResult, LookupStatus};
use crate::services::trends::TrendPoint;

// Re-export the service result types used in responses
pub use crate::services::lookup::LabeledMetric;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub historical_rows: usize,
    pub prediction_rows: usize,
}

/// Selection vocabularies for the frontend's select boxes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub crops: Vec<String>,
    pub states: Vec<String>,
    pub years: Vec<i32>,
}

/// Query parameters for the lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupQuery {
    pub crop: String,
    pub state: String,
    pub year: i32,
}

/// Response for the lookup endpoint: the service result plus a display
/// message mirroring what the original UI showed for each outcome.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    pub status: LookupStatus,
    pub source: DataSource,
    pub metrics: Vec<LabeledMetric>,
    pub message: String,
}

impl From<LookupResult> for LookupResponse {
    fn from(result: LookupResult) -> Self {
        let message = match result.status {
            LookupStatus::HistoricalFound => "Historical yearly average data found.",
            LookupStatus::PredictionFound => "Predicted yearly average data displayed.",
            LookupStatus::NotFound => "No data found for the selected combination.",
        }
        .to_string();

        Self {
            status: result.status,
            source: result.source,
            metrics: result.metrics,
            message,
        }
    }
}

/// Query parameters for the trends endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendQuery {
    pub crop: String,
    pub state: String,
    pub source: DataSource,
}

/// Response for the trends endpoint: a year-ordered average-yield series.
#[derive(Debug, Clone, Serialize)]
pub struct TrendResponse {
    pub crop: String,
    pub state: String,
    pub source: DataSource,
    pub points: Vec<TrendPoint>,
}

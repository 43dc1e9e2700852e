//! Canonical row types produced by the load pipeline.

use serde::{Deserialize, Serialize};

/// Which canonical table a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Historical observations (years up to and including 2022)
    Historical,
    /// Model-predicted future values (2023 onwards)
    Prediction,
}

/// One row of the canonical historical crop/weather table.
///
/// `year` is derived from the recorded date and is `None` when that date
/// failed to parse; such rows never match a year-keyed lookup and are
/// excluded from trend aggregation. `mapped_crop` is the crop name translated
/// into the prediction dataset's vocabulary via
/// [`crate::models::prediction_crop_name`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Crop name, title-cased
    pub crop: String,
    /// State name, title-cased
    pub state_name: String,
    /// Crop name in the prediction dataset's vocabulary
    pub mapped_crop: String,
    /// Calendar year of the recorded date, if it parsed
    pub year: Option<i32>,
    /// Rainfall in millimeters
    pub state_rainfall_val: Option<f64>,
    /// Maximum temperature in °C
    pub state_temperature_max_val: Option<f64>,
    /// Minimum temperature in °C
    pub state_temperature_min_val: Option<f64>,
    /// Yield in tonnes per hectare
    #[serde(rename = "yield")]
    pub yield_val: Option<f64>,
}

/// One row of the canonical future-predictions table.
///
/// Rainfall is stored in meters; the raw file carries millimeters and the
/// division by 1000 happens exactly once at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Crop name in the prediction dataset's own vocabulary, title-cased
    pub crop: String,
    /// State name, title-cased
    pub state: String,
    /// Prediction year (expected 2023-2025, not validated)
    pub year: i32,
    /// Total rainfall in meters
    pub total_rainfall: Option<f64>,
    /// Average maximum temperature in °C
    pub avg_max_temp: Option<f64>,
    /// Average minimum temperature in °C
    pub avg_min_temp: Option<f64>,
    /// Predicted yield in tonnes per hectare
    pub predicted_yield: Option<f64>,
}

//! Point lookup: averaged metrics for one (crop, state, year) selection.

use serde::{Deserialize, Serialize};

use crate::models::crops::prediction_crop_name;
use crate::models::records::DataSource;
use crate::models::YieldDataset;

/// Last year served from the historical table; later years go to predictions.
pub const HISTORICAL_YEAR_MAX: i32 = 2022;

/// Outcome tag for a point lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStatus {
    HistoricalFound,
    PredictionFound,
    NotFound,
}

/// One display metric: a label and its rounded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMetric {
    pub label: &'static str,
    pub value: f64,
}

/// Result of a point lookup.
///
/// `source` records which table was queried, so a `NotFound` can still tell
/// the user whether historical or predicted data was missing. `metrics` is
/// empty exactly when `status` is `NotFound`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub status: LookupStatus,
    pub source: DataSource,
    pub metrics: Vec<LabeledMetric>,
}

impl LookupResult {
    fn not_found(source: DataSource) -> Self {
        Self {
            status: LookupStatus::NotFound,
            source,
            metrics: Vec::new(),
        }
    }
}

/// Arithmetic mean over the present values; NaN when none are present.
fn mean(values: impl Iterator<Item = Option<f64>>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values.flatten() {
        sum += value;
        count += 1;
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Look up averaged metrics for an exact (crop, state, year) selection.
///
/// Years up to and including [`HISTORICAL_YEAR_MAX`] query the historical
/// table on the crop name as selected; later years query the prediction
/// table with the crop resolved through the alias map. Multiple matching
/// rows are repeated observations for the same key and are collapsed by
/// averaging. Zero matches is an ordinary `NotFound` outcome, not an error.
pub fn lookup(dataset: &YieldDataset, crop: &str, state: &str, year: i32) -> LookupResult {
    if year <= HISTORICAL_YEAR_MAX {
        let rows: Vec<_> = dataset
            .historical
            .iter()
            .filter(|r| r.crop == crop && r.state_name == state && r.year == Some(year))
            .collect();

        if rows.is_empty() {
            return LookupResult::not_found(DataSource::Historical);
        }

        LookupResult {
            status: LookupStatus::HistoricalFound,
            source: DataSource::Historical,
            metrics: vec![
                LabeledMetric {
                    label: "Avg Rainfall (mm)",
                    value: round_to(mean(rows.iter().map(|r| r.state_rainfall_val)), 2),
                },
                LabeledMetric {
                    label: "Avg Max Temp (°C)",
                    value: round_to(mean(rows.iter().map(|r| r.state_temperature_max_val)), 2),
                },
                LabeledMetric {
                    label: "Avg Min Temp (°C)",
                    value: round_to(mean(rows.iter().map(|r| r.state_temperature_min_val)), 2),
                },
                LabeledMetric {
                    label: "Avg Yield (tonnes/ha)",
                    value: round_to(mean(rows.iter().map(|r| r.yield_val)), 2),
                },
            ],
        }
    } else {
        // The prediction dataset uses its own crop vocabulary; resolve the
        // selected name through the shared alias map before filtering.
        let mapped_crop = prediction_crop_name(crop);
        let rows: Vec<_> = dataset
            .predictions
            .iter()
            .filter(|r| r.crop == mapped_crop && r.state == state && r.year == year)
            .collect();

        if rows.is_empty() {
            return LookupResult::not_found(DataSource::Prediction);
        }

        LookupResult {
            status: LookupStatus::PredictionFound,
            source: DataSource::Prediction,
            metrics: vec![
                LabeledMetric {
                    // Rainfall is reported in meters, hence the extra decimal.
                    label: "Predicted Rainfall (m)",
                    value: round_to(mean(rows.iter().map(|r| r.total_rainfall)), 3),
                },
                LabeledMetric {
                    label: "Predicted Max Temp (°C)",
                    value: round_to(mean(rows.iter().map(|r| r.avg_max_temp)), 2),
                },
                LabeledMetric {
                    label: "Predicted Min Temp (°C)",
                    value: round_to(mean(rows.iter().map(|r| r.avg_min_temp)), 2),
                },
                LabeledMetric {
                    label: "Predicted Yield (tonnes/ha)",
                    value: round_to(mean(rows.iter().map(|r| r.predicted_yield)), 2),
                },
            ],
        }
    }
}

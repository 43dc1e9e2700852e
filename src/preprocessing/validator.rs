//! Eager schema validation for the raw tables.
//!
//! Required columns are checked immediately after parsing so a malformed
//! file fails at startup instead of on first access mid-query.

use polars::prelude::DataFrame;

use super::error::DataLoadError;

/// Table label used in error messages for the historical dataset.
pub const HISTORICAL_TABLE: &str = "historical";
/// Table label used in error messages for the prediction dataset.
pub const PREDICTION_TABLE: &str = "prediction";

/// Columns the historical table must carry after column-name normalization.
pub const HISTORICAL_REQUIRED_COLUMNS: [&str; 7] = [
    "crop",
    "state_name",
    "temperature_recorded_date",
    "state_rainfall_val",
    "state_temperature_max_val",
    "state_temperature_min_val",
    "yield",
];

/// Columns the prediction table must carry after column-name normalization.
pub const PREDICTION_REQUIRED_COLUMNS: [&str; 7] = [
    "crop",
    "state",
    "year",
    "total_rainfall",
    "avg_max_temp",
    "avg_min_temp",
    "predicted_yield",
];

/// Check that `df` carries every column in `required`.
pub fn require_columns(
    df: &DataFrame,
    table: &'static str,
    required: &[&str],
) -> Result<(), DataLoadError> {
    let present: Vec<&str> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|col| !present.contains(*col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DataLoadError::MissingColumns {
            table,
            columns: missing,
        })
    }
}

//! The dataset load pipeline.

use polars::prelude::DataFrame;
use std::path::Path;

use crate::models::YieldDataset;
use crate::parsing::csv_parser;

use super::error::DataLoadError;
use super::validator::{
    require_columns, HISTORICAL_REQUIRED_COLUMNS, HISTORICAL_TABLE, PREDICTION_REQUIRED_COLUMNS,
    PREDICTION_TABLE,
};

/// Row statistics collected while loading.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct LoadReport {
    /// Rows in the canonical historical table
    pub historical_rows: usize,
    /// Historical rows whose recorded date failed to parse
    pub undated_rows: usize,
    /// Rows in the canonical prediction table
    pub prediction_rows: usize,
}

/// Result of a pipeline run: the canonical dataset plus load statistics.
#[derive(Debug)]
pub struct PipelineResult {
    pub dataset: YieldDataset,
    pub report: LoadReport,
}

/// Load and normalize both CSV files into the canonical dataset.
///
/// Given the same inputs this is deterministic and produces identical
/// tables, so callers are free to run it once per process and share the
/// result.
pub fn load_dataset(
    historical_csv: &Path,
    predictions_csv: &Path,
) -> Result<PipelineResult, DataLoadError> {
    let hist_df = csv_parser::read_table(historical_csv)?;
    let pred_df = csv_parser::read_table(predictions_csv)?;
    load_dataset_from_frames(hist_df, pred_df)
}

/// Normalize already-parsed raw tables into the canonical dataset.
///
/// Useful for tests and for callers that obtain the tables some other way.
pub fn load_dataset_from_frames(
    mut hist_df: DataFrame,
    mut pred_df: DataFrame,
) -> Result<PipelineResult, DataLoadError> {
    // Step 1: normalize column names on both tables
    csv_parser::normalize_column_names(&mut hist_df)?;
    csv_parser::normalize_column_names(&mut pred_df)?;

    // Step 2: validate schemas eagerly, before any row conversion
    require_columns(&hist_df, HISTORICAL_TABLE, &HISTORICAL_REQUIRED_COLUMNS)?;
    require_columns(&pred_df, PREDICTION_TABLE, &PREDICTION_REQUIRED_COLUMNS)?;

    // Step 3: convert rows (dates, name canonicalization, crop aliasing,
    // rainfall unit conversion all happen here)
    let historical = csv_parser::dataframe_to_historical_records(&hist_df)?;
    let predictions = csv_parser::dataframe_to_prediction_records(&pred_df)?;

    // Step 4: collect statistics
    let undated_rows = historical.iter().filter(|r| r.year.is_none()).count();
    let report = LoadReport {
        historical_rows: historical.len(),
        undated_rows,
        prediction_rows: predictions.len(),
    };

    if report.undated_rows > 0 {
        log::warn!(
            "{} historical rows have no parseable recorded date and will be excluded from year-keyed queries",
            report.undated_rows
        );
    }
    log::info!(
        "loaded {} historical rows and {} prediction rows",
        report.historical_rows,
        report.prediction_rows
    );

    Ok(PipelineResult {
        dataset: YieldDataset::new(historical, predictions),
        report,
    })
}

//! CSV ingestion and DataFrame-to-record conversion.

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use std::path::Path;

use crate::models::crops::prediction_crop_name;
use crate::models::records::{HistoricalRecord, PredictionRecord};
use crate::preprocessing::error::DataLoadError;

/// Millimeters per meter, for the prediction rainfall conversion.
const MM_PER_M: f64 = 1000.0;

/// Date formats accepted for the historical recorded-date field.
///
/// The source files are not consistent about date formatting; anything that
/// matches none of these yields a null year for that row.
const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a CSV file into a Polars DataFrame.
pub fn read_table(path: &Path) -> Result<DataFrame, DataLoadError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.into()))
        .and_then(|reader| reader.finish())
        .map_err(|source| DataLoadError::Read {
            path: path.to_path_buf(),
            source,
        })
}

/// Normalize column names in place: trim, internal spaces to underscores,
/// lowercase.
pub fn normalize_column_names(df: &mut DataFrame) -> PolarsResult<()> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().trim().replace(' ', "_").to_lowercase())
        .collect();
    df.set_column_names(names)
}

/// Title-case a name the way the datasets expect: the first letter of every
/// alphabetic run uppercased, the rest lowercased. Non-alphabetic characters
/// start a new run, so "rapeseed &mustard" becomes "Rapeseed &Mustard".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Extract the calendar year from a recorded-date string, or `None` when the
/// date matches no accepted format.
pub fn parse_record_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .map(|date| date.year())
}

fn canonical_name(value: Option<&str>) -> String {
    value.map(|s| title_case(s.trim())).unwrap_or_default()
}

/// Convert a column-normalized historical DataFrame into canonical records.
///
/// Applies name canonicalization, date-to-year derivation, and the crop
/// alias for the `mapped_crop` field. Rows with unparseable dates are kept
/// with a null year rather than dropped.
pub fn dataframe_to_historical_records(
    df: &DataFrame,
) -> Result<Vec<HistoricalRecord>, DataLoadError> {
    // Cast guards: Polars infers integer types for whole-number columns and
    // the date column may arrive under any inferred type.
    let crops_col = df.column("crop")?.cast(&DataType::String)?;
    let crops = crops_col.str()?;
    let states_col = df.column("state_name")?.cast(&DataType::String)?;
    let states = states_col.str()?;
    let dates_col = df
        .column("temperature_recorded_date")?
        .cast(&DataType::String)?;
    let dates = dates_col.str()?;
    let rainfall_col = df.column("state_rainfall_val")?.cast(&DataType::Float64)?;
    let rainfall = rainfall_col.f64()?;
    let max_temp_col = df
        .column("state_temperature_max_val")?
        .cast(&DataType::Float64)?;
    let max_temp = max_temp_col.f64()?;
    let min_temp_col = df
        .column("state_temperature_min_val")?
        .cast(&DataType::Float64)?;
    let min_temp = min_temp_col.f64()?;
    let yields_col = df.column("yield")?.cast(&DataType::Float64)?;
    let yields = yields_col.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let crop = canonical_name(crops.get(i));
        let mapped_crop = prediction_crop_name(&crop).to_string();
        records.push(HistoricalRecord {
            crop,
            state_name: canonical_name(states.get(i)),
            mapped_crop,
            year: dates.get(i).and_then(parse_record_year),
            state_rainfall_val: rainfall.get(i),
            state_temperature_max_val: max_temp.get(i),
            state_temperature_min_val: min_temp.get(i),
            yield_val: yields.get(i),
        });
    }

    Ok(records)
}

/// Convert a column-normalized prediction DataFrame into canonical records.
///
/// Applies name canonicalization and the millimeters-to-meters rainfall
/// conversion. Rows without a year cannot be queried and are skipped.
pub fn dataframe_to_prediction_records(
    df: &DataFrame,
) -> Result<Vec<PredictionRecord>, DataLoadError> {
    let crops_col = df.column("crop")?.cast(&DataType::String)?;
    let crops = crops_col.str()?;
    let states_col = df.column("state")?.cast(&DataType::String)?;
    let states = states_col.str()?;
    let years_col = df.column("year")?.cast(&DataType::Int32)?;
    let years = years_col.i32()?;
    let rainfall_col = df.column("total_rainfall")?.cast(&DataType::Float64)?;
    let rainfall = rainfall_col.f64()?;
    let max_temp_col = df.column("avg_max_temp")?.cast(&DataType::Float64)?;
    let max_temp = max_temp_col.f64()?;
    let min_temp_col = df.column("avg_min_temp")?.cast(&DataType::Float64)?;
    let min_temp = min_temp_col.f64()?;
    let yields_col = df.column("predicted_yield")?.cast(&DataType::Float64)?;
    let yields = yields_col.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let Some(year) = years.get(i) else {
            log::warn!("prediction row {} has no year, skipping", i);
            continue;
        };
        records.push(PredictionRecord {
            crop: canonical_name(crops.get(i)),
            state: canonical_name(states.get(i)),
            year,
            total_rainfall: rainfall.get(i).map(|mm| mm / MM_PER_M),
            avg_max_temp: max_temp.get(i),
            avg_min_temp: min_temp.get(i),
            predicted_yield: yields.get(i),
        });
    }

    Ok(records)
}

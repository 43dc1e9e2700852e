//! End-to-end tests: raw CSV files through the pipeline to query results.

use std::fs;
use std::path::PathBuf;

use cyi_rust::models::records::DataSource;
use cyi_rust::preprocessing::{load_dataset, DataLoadError};
use cyi_rust::services::lookup::{lookup, LookupStatus};
use cyi_rust::services::trends::yield_trend;
use cyi_rust::services::vocabulary::{crop_options, state_options};

const HISTORICAL_CSV: &str = "\
Crop,State Name,Temperature Recorded Date,State Rainfall Val,State Temperature Max Val,State Temperature Min Val,Yield
wheat,punjab,2010-03-15,620.0,37.0,20.0,3.0
wheat,punjab,2010-07-20,680.0,39.0,22.0,4.0
wheat,punjab,2010-11-05,650.0,38.0,21.0,5.0
wheat,punjab,2022-04-10,700.0,40.0,23.0,3.5
rice,kerala,2008-06-01,2900.0,32.0,23.0,2.0
rice,kerala,2010-06-01,3000.0,33.0,24.0,2.2
rice,kerala,2012-06-01,2950.0,32.5,23.5,2.4
rice,kerala,not a date,2800.0,31.0,22.0,9.9
mustard,west bengal,2015-12-01,1500.0,29.0,15.0,1.1
";

const PREDICTIONS_CSV: &str = "\
Crop,State,Year,Total Rainfall,Avg Max Temp,Avg Min Temp,Predicted Yield
wheat,punjab,2023,710.0,40.5,23.5,3.8
rice,kerala,2023,3100.0,33.5,24.5,2.5
rice,kerala,2024,3150.0,33.8,24.8,2.6
rapeseed &mustard,west bengal,2024,1550.0,29.5,15.5,1.3
";

struct Fixture {
    _dir: tempfile::TempDir,
    historical: PathBuf,
    predictions: PathBuf,
}

fn write_fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let historical = dir.path().join("combined_crop_weather_dataset.csv");
    let predictions = dir.path().join("future_yield_predictions.csv");
    fs::write(&historical, HISTORICAL_CSV).unwrap();
    fs::write(&predictions, PREDICTIONS_CSV).unwrap();
    Fixture {
        _dir: dir,
        historical,
        predictions,
    }
}

#[test]
fn test_load_and_point_lookup_historical() {
    let fixture = write_fixture();
    let result = load_dataset(&fixture.historical, &fixture.predictions).unwrap();

    assert_eq!(result.report.historical_rows, 9);
    assert_eq!(result.report.undated_rows, 1);
    assert_eq!(result.report.prediction_rows, 4);

    let outcome = lookup(&result.dataset, "Wheat", "Punjab", 2010);
    assert_eq!(outcome.status, LookupStatus::HistoricalFound);

    let metric = |label: &str| {
        outcome
            .metrics
            .iter()
            .find(|m| m.label == label)
            .unwrap()
            .value
    };
    assert_eq!(metric("Avg Yield (tonnes/ha)"), 4.0);
    assert_eq!(metric("Avg Rainfall (mm)"), 650.0);
    assert_eq!(metric("Avg Max Temp (°C)"), 38.0);
    assert_eq!(metric("Avg Min Temp (°C)"), 21.0);
}

#[test]
fn test_prediction_lookup_with_alias_and_unit_conversion() {
    let fixture = write_fixture();
    let result = load_dataset(&fixture.historical, &fixture.predictions).unwrap();

    // "Mustard" is the historical name; the prediction table stores
    // "Rapeseed &Mustard".
    let outcome = lookup(&result.dataset, "Mustard", "West Bengal", 2024);
    assert_eq!(outcome.status, LookupStatus::PredictionFound);

    let rainfall = outcome
        .metrics
        .iter()
        .find(|m| m.label == "Predicted Rainfall (m)")
        .unwrap();
    // 1550 mm raw, converted to meters once at load time.
    assert_eq!(rainfall.value, 1.55);

    // Rainfall conversion exactness across the whole table.
    let expected_m = [0.710, 3.100, 3.150, 1.550];
    for (record, expected) in result.dataset.predictions.iter().zip(expected_m) {
        assert!((record.total_rainfall.unwrap() - expected).abs() < 1e-12);
    }
}

#[test]
fn test_year_threshold_branching_end_to_end() {
    let fixture = write_fixture();
    let result = load_dataset(&fixture.historical, &fixture.predictions).unwrap();

    let boundary = lookup(&result.dataset, "Wheat", "Punjab", 2022);
    assert_eq!(boundary.status, LookupStatus::HistoricalFound);
    assert_eq!(boundary.metrics[0].label, "Avg Rainfall (mm)");

    let future = lookup(&result.dataset, "Wheat", "Punjab", 2023);
    assert_eq!(future.status, LookupStatus::PredictionFound);
    assert_eq!(future.metrics[0].label, "Predicted Rainfall (m)");
}

#[test]
fn test_not_found_outcomes() {
    let fixture = write_fixture();
    let result = load_dataset(&fixture.historical, &fixture.predictions).unwrap();

    let missing_state = lookup(&result.dataset, "Wheat", "Atlantis", 2010);
    assert_eq!(missing_state.status, LookupStatus::NotFound);
    assert_eq!(missing_state.source, DataSource::Historical);
    assert!(missing_state.metrics.is_empty());

    let missing_prediction = lookup(&result.dataset, "Wheat", "Atlantis", 2025);
    assert_eq!(missing_prediction.status, LookupStatus::NotFound);
    assert_eq!(missing_prediction.source, DataSource::Prediction);
}

#[test]
fn test_trend_series_excludes_undated_rows() {
    let fixture = write_fixture();
    let result = load_dataset(&fixture.historical, &fixture.predictions).unwrap();

    let series = yield_trend(&result.dataset, "Rice", "Kerala", DataSource::Historical);
    let years: Vec<i32> = series.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2008, 2010, 2012]);
    // The 9.9-yield row has no parseable date and must not contribute.
    assert!(series.iter().all(|p| p.avg_yield < 3.0));

    let future = yield_trend(&result.dataset, "Rice", "Kerala", DataSource::Prediction);
    let years: Vec<i32> = future.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2023, 2024]);
}

#[test]
fn test_vocabularies_come_from_the_historical_table() {
    let fixture = write_fixture();
    let result = load_dataset(&fixture.historical, &fixture.predictions).unwrap();

    assert_eq!(
        crop_options(&result.dataset),
        vec!["Mustard", "Rice", "Wheat"]
    );
    assert_eq!(
        state_options(&result.dataset),
        vec!["Kerala", "Punjab", "West Bengal"]
    );
}

#[test]
fn test_loading_twice_yields_identical_tables() {
    let fixture = write_fixture();
    let first = load_dataset(&fixture.historical, &fixture.predictions).unwrap();
    let second = load_dataset(&fixture.historical, &fixture.predictions).unwrap();
    assert_eq!(first.dataset, second.dataset);
}

#[test]
fn test_missing_file_is_a_load_error() {
    let fixture = write_fixture();
    let missing = fixture.historical.with_file_name("nope.csv");
    let err = load_dataset(&missing, &fixture.predictions).unwrap_err();
    assert!(matches!(err, DataLoadError::Read { .. }));
}

#[test]
fn test_missing_columns_are_a_load_error() {
    let fixture = write_fixture();
    let truncated = fixture.historical.with_file_name("truncated.csv");
    fs::write(&truncated, "Crop,State Name\nwheat,punjab\n").unwrap();

    let err = load_dataset(&truncated, &fixture.predictions).unwrap_err();
    match err {
        DataLoadError::MissingColumns { table, columns } => {
            assert_eq!(table, "historical");
            assert!(columns.contains(&"yield".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the query logic.

use axum::{
    extract::{Query, State},
    Json,
};

use super::dto::{
    HealthResponse, LookupQuery, LookupResponse, OptionsResponse, TrendQuery, TrendResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services;
use crate::services::vocabulary::{YEAR_MAX, YEAR_MIN};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint reporting the loaded dataset sizes.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        historical_rows: state.report.historical_rows,
        prediction_rows: state.report.prediction_rows,
    }))
}

/// GET /v1/options
///
/// Selection vocabularies for the frontend's crop/state/year select boxes.
pub async fn get_options(State(state): State<AppState>) -> HandlerResult<OptionsResponse> {
    Ok(Json(OptionsResponse {
        crops: services::crop_options(state.dataset.as_ref()),
        states: services::state_options(state.dataset.as_ref()),
        years: services::year_options(),
    }))
}

/// GET /v1/lookup?crop=..&state=..&year=..
///
/// Averaged metrics for one (crop, state, year) selection. A selection that
/// matches no rows returns 200 with a `not_found` status, never an error.
pub async fn get_lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> HandlerResult<LookupResponse> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&query.year) {
        return Err(AppError::BadRequest(format!(
            "year must be between {} and {}",
            YEAR_MIN, YEAR_MAX
        )));
    }

    let result = services::lookup(state.dataset.as_ref(), &query.crop, &query.state, query.year);
    Ok(Json(LookupResponse::from(result)))
}

/// GET /v1/trends?crop=..&state=..&source=historical|prediction
///
/// Year-ordered average-yield series for a (crop, state) pair. An empty
/// series is a valid response.
pub async fn get_trends(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> HandlerResult<TrendResponse> {
    let points =
        services::yield_trend(state.dataset.as_ref(), &query.crop, &query.state, query.source);
    Ok(Json(TrendResponse {
        crop: query.crop,
        state: query.state,
        source: query.source,
        points,
    }))
}

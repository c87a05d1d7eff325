use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use paxflow_core::{DateUtility, FlightSearchResult, FlightSummary, PassengerCriteria, SearchRequest};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FlightListResponse {
    pub list: FlightList,
}

#[derive(Debug, Serialize)]
pub struct FlightList {
    pub flights: Vec<FlightSummary>,
    /// `null` when nothing matched.
    pub range: Option<DisplayRange>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRange {
    pub minimum_date: String,
    pub maximum_date: String,
}

impl FlightListResponse {
    fn from_result(result: FlightSearchResult, dates: &dyn DateUtility) -> Self {
        let range = result.range.map(|range| DisplayRange {
            minimum_date: dates.to_display_format(range.minimum_date),
            maximum_date: dates.to_display_format(range.maximum_date),
        });

        Self {
            list: FlightList {
                flights: result.flights,
                range,
            },
        }
    }
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/service/flight/list", get(list_flights))
        .route("/service/flight/details/{flight_id}", get(flight_detail))
}

/// GET /service/flight/list
pub async fn list_flights(
    State(state): State<AppState>,
    query: Result<Query<SearchRequest>, QueryRejection>,
) -> Result<Json<FlightListResponse>, AppError> {
    let Query(request) = query?;
    if request.station.trim().is_empty() {
        return Err(AppError::ValidationError("station is required".to_string()));
    }

    let result = state.flight_service.search_flights(&request).await?;
    let dates = state.flight_service.date_utility();
    Ok(Json(FlightListResponse::from_result(result, dates)))
}

/// GET /service/flight/details/{flight_id}
pub async fn flight_detail(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
    query: Result<Query<PassengerCriteria>, QueryRejection>,
) -> Result<Json<FlightSummary>, AppError> {
    let Query(criteria) = query?;
    state
        .flight_service
        .get_flight_detail(&flight_id, &criteria)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Flight {} not found", flight_id)))
}

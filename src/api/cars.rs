//! Car endpoints over the shared [`CarStore`](crate::store::CarStore).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::api::error::{ApiError, ID_REQUIRED};
use crate::api::extract::JsonBody;
use crate::api::validation::{car_from_body, is_truthy, non_empty, query_param};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::store::Car;

/// GET /cars/ with optional `make` filter. An empty `make` means no filter.
///
/// A repeated `make` key never equals a stored make, so it lists nothing.
pub async fn list_cars(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Car>> {
    let cars = match query_param(&params, "make").filter(is_truthy) {
        Some(Value::String(make)) => state.store.filter_by_make(&make),
        Some(_) => Vec::new(),
        None => state.store.list(),
    };
    Json(cars)
}

/// GET /cars/{id}
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, ApiError> {
    let id = non_empty(Some(id.as_str())).ok_or(ApiError::MissingField(ID_REQUIRED))?;
    state.store.find_by_id(id).map(Json).ok_or(ApiError::NotFound)
}

/// POST /cars
pub async fn create_car(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Car>), ApiError> {
    let car = car_from_body(&body)?;

    state.store.append(car.clone());
    metrics::record_car_created();
    tracing::info!(id = %car.id, model = %car.model, "Car created");

    Ok((StatusCode::CREATED, Json(car)))
}

//! HTTP handlers for car park reference data

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{CarParkInfo, SpotCapacity};

use crate::error::AppResult;
use crate::AppState;

/// List all car parks in selector order
pub async fn list_car_parks(State(state): State<AppState>) -> Json<Vec<CarParkInfo>> {
    Json(state.occupancy.reference().car_parks().to_vec())
}

/// Names for the car park selector
pub async fn list_car_park_names(State(state): State<AppState>) -> Json<Vec<String>> {
    let names = state
        .occupancy
        .reference()
        .list_car_park_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(names)
}

/// Get a car park by name
pub async fn get_car_park(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<CarParkInfo>> {
    let car_park = state.occupancy.reference().get_car_park(&name)?;
    Ok(Json(car_park.clone()))
}

/// Get a facility's total spots
pub async fn get_capacity(
    State(state): State<AppState>,
    Path(facility_name): Path<String>,
) -> AppResult<Json<SpotCapacity>> {
    let capacity = state.occupancy.reference().get_capacity(&facility_name)?;
    Ok(Json(capacity.clone()))
}

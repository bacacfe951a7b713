//! Route definitions for the Car Park Finder

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Car park reference data and predictions
        .nest("/car-parks", car_park_routes())
        // Facility capacities
        .route("/capacities/:facility_name", get(handlers::get_capacity))
        // Initial map state
        .route("/map", get(handlers::get_map_settings))
}

/// Car park routes
fn car_park_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_car_parks))
        .route("/names", get(handlers::list_car_park_names))
        .route("/:name", get(handlers::get_car_park))
        .route("/:name/prediction", get(handlers::get_prediction))
}

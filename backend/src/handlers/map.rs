//! HTTP handlers for the dashboard map

use axum::{extract::State, Json};
use serde::Serialize;
use shared::{GpsCoordinates, MapView};

use crate::AppState;

/// Initial map state before any car park is selected
#[derive(Debug, Serialize)]
pub struct MapSettingsResponse {
    pub style: String,
    pub view: MapView,
}

pub async fn get_map_settings(State(state): State<AppState>) -> Json<MapSettingsResponse> {
    let map = &state.config.map;
    Json(MapSettingsResponse {
        style: map.style.clone(),
        view: MapView::new(
            GpsCoordinates::new(map.initial_latitude, map.initial_longitude),
            map.zoom,
        ),
    })
}

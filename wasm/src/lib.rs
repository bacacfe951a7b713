//! WebAssembly module for the Car Park Finder
//!
//! Provides client-side helpers for the dashboard:
//! - Car park selector options
//! - Occupancy arithmetic
//! - Map marker payloads
//! - Metric labels for a prediction

use serde_json::json;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{occupancy_from, ReferenceData, BUILTIN_CAR_PARKS, DEFAULT_MARKER_RADIUS_M};

/// Round a predicted available count the way the server does
#[wasm_bindgen]
pub fn round_available(predicted_available: f64) -> f64 {
    shared::round_available(predicted_available) as f64
}

/// Available, total and occupied spots as JSON
#[wasm_bindgen]
pub fn calculate_occupancy(total: u32, predicted_available: f64) -> String {
    let result = occupancy_from(total, predicted_available);
    json!({
        "available": result.available,
        "total": result.total,
        "occupied": result.occupied,
    })
    .to_string()
}

/// Built-in car park names for the selector, as a JSON array
#[wasm_bindgen]
pub fn car_park_names() -> String {
    let names: Vec<&str> = BUILTIN_CAR_PARKS.iter().map(|(name, _, _)| *name).collect();
    json!(names).to_string()
}

/// Marker JSON for a built-in car park, or nothing if the name is unknown
#[wasm_bindgen]
pub fn car_park_marker(name: &str) -> Option<String> {
    let reference = ReferenceData::builtin().ok()?;
    let car_park = reference.get_car_park(name).ok()?;
    serde_json::to_string(&MapMarker::for_car_park(car_park, DEFAULT_MARKER_RADIUS_M)).ok()
}

/// Metric lines shown under the map for a prediction response
#[wasm_bindgen]
pub fn describe_prediction(prediction_json: &str) -> Result<String, JsValue> {
    let prediction: Prediction = serde_json::from_str(prediction_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid prediction JSON: {}", e)))?;

    Ok(metric_lines(&prediction.result).join("\n"))
}

/// Today's date from the browser clock, `YYYY-MM-DD`, for the date picker default
#[wasm_bindgen]
pub fn today_iso_date() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

fn metric_lines(result: &PredictionResult) -> [String; 3] {
    [
        format!("Number of parking spots available: {}", result.available),
        format!("Total parking spots in parking lot: {}", result.total),
        format!("Occupancy: {}", result.occupied),
    ]
}

//! Occupancy prediction models

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{CarParkInfo, MapMarker, MapView};

/// The three metrics shown for a car park on a date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionResult {
    /// Predicted available spots, rounded
    pub available: i64,
    /// Total spots in the facility
    pub total: u32,
    /// `total - available`
    pub occupied: i64,
}

/// Everything the dashboard renders after "Process Data"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prediction {
    pub car_park: CarParkInfo,
    pub date: NaiveDate,
    pub timestamp: NaiveDateTime,
    /// Unrounded value read from the forecast series
    pub forecast_value: f64,
    pub result: PredictionResult,
    pub marker: MapMarker,
    pub view: MapView,
}

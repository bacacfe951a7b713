//! Occupancy calculation
//!
//! Combines a loaded forecast series with the capacity table. Rounding
//! happens once, on the final available count, using half-to-even.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CarParkError, CarParkResult};
use crate::models::{normalize_date, ForecastSeries, PredictionResult};
use crate::reference::ReferenceData;

/// Forecast value and derived metrics for one car park on one date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyForecast {
    pub timestamp: NaiveDateTime,
    pub forecast_value: f64,
    pub result: PredictionResult,
}

/// Round a predicted available count for display (ties to even)
pub fn round_available(predicted: f64) -> i64 {
    predicted.round_ties_even() as i64
}

/// Derive the displayed metrics. The rounded available count is clamped
/// into `[0, total]`, so all three metrics stay non-negative.
pub fn occupancy_from(total: u32, predicted_available: f64) -> PredictionResult {
    let available = round_available(predicted_available).clamp(0, i64::from(total));
    PredictionResult {
        available,
        total,
        occupied: i64::from(total) - available,
    }
}

/// Compute occupancy for the series' car park on `date`
pub fn calculate_occupancy(
    series: &ForecastSeries,
    date: NaiveDate,
    reference: &ReferenceData,
) -> CarParkResult<OccupancyForecast> {
    let timestamp = normalize_date(date);
    let forecast_value = series
        .query(timestamp)
        .map_err(|miss| CarParkError::ForecastUnavailable {
            car_park: series.car_park().to_string(),
            timestamp: miss.timestamp,
        })?;
    let capacity = reference.get_capacity(series.car_park())?;

    Ok(OccupancyForecast {
        timestamp,
        forecast_value,
        result: occupancy_from(capacity.total_spots, forecast_value),
    })
}

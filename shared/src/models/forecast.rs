//! Forecast series models
//!
//! A forecast artifact is deserialized into a [`ForecastSeries`]: one
//! predicted available-spot value per normalized timestamp.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CarParkError, CarParkResult};

/// Largest magnitude accepted for a predicted available count. Anything
/// beyond this cannot be a spot count and marks the artifact as corrupt.
pub const MAX_FORECAST_MAGNITUDE: f64 = 1.0e9;

/// Timestamp layouts accepted in forecast artifacts, tried in order
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Normalize a calendar date to the key used by forecast series.
///
/// Forecasts are produced at daily granularity and keyed at midnight, so a
/// date always maps to `date 00:00:00`. Queries never use any other time.
pub fn normalize_date(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Parse a forecast timestamp. A bare date means midnight.
pub fn parse_forecast_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(normalize_date)
        })
}

/// A single forecast row
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub predicted_available: f64,
}

/// Exact-match miss on a forecast series
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No forecast entry at {timestamp}")]
pub struct NotFoundInSeries {
    pub timestamp: NaiveDateTime,
}

/// Predicted available spots over time for one car park
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    car_park: String,
    points: BTreeMap<NaiveDateTime, f64>,
}

impl ForecastSeries {
    /// Build a series, rejecting duplicate timestamps and values that are
    /// non-finite or outside `±MAX_FORECAST_MAGNITUDE`
    pub fn from_points<I>(car_park: impl Into<String>, points: I) -> CarParkResult<Self>
    where
        I: IntoIterator<Item = ForecastPoint>,
    {
        let car_park = car_park.into();
        let mut map = BTreeMap::new();

        for point in points {
            if !point.predicted_available.is_finite() {
                return Err(CarParkError::corrupt_artifact(
                    &car_park,
                    format!("non-finite forecast value at {}", point.timestamp),
                ));
            }
            if point.predicted_available.abs() > MAX_FORECAST_MAGNITUDE {
                return Err(CarParkError::corrupt_artifact(
                    &car_park,
                    format!(
                        "forecast value {} at {} is out of range",
                        point.predicted_available, point.timestamp
                    ),
                ));
            }
            if map
                .insert(point.timestamp, point.predicted_available)
                .is_some()
            {
                return Err(CarParkError::corrupt_artifact(
                    &car_park,
                    format!("duplicate forecast timestamp {}", point.timestamp),
                ));
            }
        }

        Ok(Self {
            car_park,
            points: map,
        })
    }

    pub fn car_park(&self) -> &str {
        &self.car_park
    }

    /// Exact lookup, no interpolation between neighbouring entries
    pub fn query(&self, timestamp: NaiveDateTime) -> Result<f64, NotFoundInSeries> {
        self.points
            .get(&timestamp)
            .copied()
            .ok_or(NotFoundInSeries { timestamp })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last timestamps covered by the series
    pub fn coverage(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let first = self.points.keys().next()?;
        let last = self.points.keys().next_back()?;
        Some((*first, *last))
    }

    pub fn points(&self) -> impl Iterator<Item = ForecastPoint> + '_ {
        self.points
            .iter()
            .map(|(timestamp, value)| ForecastPoint {
                timestamp: *timestamp,
                predicted_available: *value,
            })
    }
}

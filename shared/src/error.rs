//! Lookup and forecast errors
//!
//! Every way a "Process Data" action can fail is a variant here, so callers
//! can render a message instead of a blank metric.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised by the reference store, forecast loading and occupancy calculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarParkError {
    #[error("Car park not found: {0}")]
    CarParkNotFound(String),

    #[error("No capacity recorded for facility: {0}")]
    CapacityNotFound(String),

    #[error("No forecast artifact for car park {car_park}: {reason}")]
    ArtifactNotFound { car_park: String, reason: String },

    #[error("Forecast artifact for car park {car_park} is corrupt: {reason}")]
    CorruptArtifact { car_park: String, reason: String },

    #[error("No forecast available for {car_park} at {timestamp}")]
    ForecastUnavailable {
        car_park: String,
        timestamp: NaiveDateTime,
    },

    #[error("Duplicate car park in reference data: {0}")]
    DuplicateCarPark(String),

    #[error("Duplicate facility in reference data: {0}")]
    DuplicateFacility(String),

    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),
}

impl CarParkError {
    pub fn artifact_not_found(car_park: impl Into<String>, reason: impl Into<String>) -> Self {
        CarParkError::ArtifactNotFound {
            car_park: car_park.into(),
            reason: reason.into(),
        }
    }

    pub fn corrupt_artifact(car_park: impl Into<String>, reason: impl Into<String>) -> Self {
        CarParkError::CorruptArtifact {
            car_park: car_park.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code, also used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            CarParkError::CarParkNotFound(_) => "CAR_PARK_NOT_FOUND",
            CarParkError::CapacityNotFound(_) => "CAPACITY_NOT_FOUND",
            CarParkError::ArtifactNotFound { .. } => "ARTIFACT_NOT_FOUND",
            CarParkError::CorruptArtifact { .. } => "CORRUPT_ARTIFACT",
            CarParkError::ForecastUnavailable { .. } => "FORECAST_UNAVAILABLE",
            CarParkError::DuplicateCarPark(_) => "DUPLICATE_CAR_PARK",
            CarParkError::DuplicateFacility(_) => "DUPLICATE_FACILITY",
            CarParkError::InvalidReferenceData(_) => "INVALID_REFERENCE_DATA",
        }
    }
}

/// Result alias for car park lookups
pub type CarParkResult<T> = Result<T, CarParkError>;

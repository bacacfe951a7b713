//! Error handling for the Car Park Finder
//!
//! Every failure of a dashboard action is rendered as a JSON error body so
//! the shell can show a message instead of blank metrics.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::CarParkError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Lookup and forecast errors
    #[error(transparent)]
    CarPark(#[from] CarParkError),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CarPark(err) => match err {
                CarParkError::CarParkNotFound(_)
                | CarParkError::CapacityNotFound(_)
                | CarParkError::ArtifactNotFound { .. }
                | CarParkError::ForecastUnavailable { .. } => StatusCode::NOT_FOUND,
                CarParkError::CorruptArtifact { .. }
                | CarParkError::DuplicateCarPark(_)
                | CarParkError::DuplicateFacility(_)
                | CarParkError::InvalidReferenceData(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_detail = match &self {
            AppError::CarPark(err) => ErrorDetail {
                code: err.code().to_string(),
                message: user_message(err),
                field: None,
            },
            AppError::Validation { field, message } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message: message.clone(),
                field: Some(field.clone()),
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message: format!("Configuration error: {}", msg),
                field: None,
            },
            AppError::Internal(msg) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message: msg.clone(),
                field: None,
            },
        };

        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request failed: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Message shown to the dashboard user. Storage paths and parser details
/// stay in the logs.
fn user_message(err: &CarParkError) -> String {
    match err {
        CarParkError::CarParkNotFound(name) => format!("Car park {} not found", name),
        CarParkError::CapacityNotFound(name) => {
            format!("Total spot count for {} is not recorded", name)
        }
        CarParkError::ArtifactNotFound { car_park, .. } => {
            format!("No forecast model is available for {}", car_park)
        }
        CarParkError::CorruptArtifact { car_park, .. } => {
            format!("The forecast model for {} could not be read", car_park)
        }
        CarParkError::ForecastUnavailable { car_park, timestamp } => format!(
            "No forecast available for {} on {}",
            car_park,
            timestamp.date()
        ),
        other => other.to_string(),
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_lookup_misses_are_not_found() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let errors = [
            CarParkError::CarParkNotFound("x".into()),
            CarParkError::CapacityNotFound("x".into()),
            CarParkError::artifact_not_found("x", "missing"),
            CarParkError::ForecastUnavailable {
                car_park: "x".into(),
                timestamp,
            },
        ];
        for err in errors {
            assert_eq!(AppError::from(err).status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_corrupt_artifact_is_server_error() {
        let err = AppError::from(CarParkError::corrupt_artifact("x", "bad"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_user_message_hides_reason() {
        let err = CarParkError::artifact_not_found("Kiama Car Park", "/srv/model/Kiama Car Park.csv: No such file");
        let message = user_message(&err);
        assert_eq!(message, "No forecast model is available for Kiama Car Park");
    }

    #[test]
    fn test_internal_errors_are_server_errors() {
        for err in [
            AppError::Configuration("bad reference path".into()),
            AppError::Internal("Task join error".into()),
        ] {
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_validation_status() {
        let err = AppError::validation("date", "Date must be in YYYY-MM-DD format");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}

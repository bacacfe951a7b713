//! HTTP handlers for occupancy predictions

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use shared::{parse_selected_date, Prediction};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Query parameters for a prediction
#[derive(Debug, Deserialize)]
pub struct PredictionQuery {
    /// `YYYY-MM-DD`; defaults to today
    pub date: Option<String>,
}

impl PredictionQuery {
    fn selected_date(&self) -> AppResult<NaiveDate> {
        match self.date.as_deref() {
            Some(raw) => parse_selected_date(raw).map_err(|msg| AppError::validation("date", msg)),
            None => Ok(Local::now().date_naive()),
        }
    }
}

/// Predict availability for a car park on a date ("Process Data")
pub async fn get_prediction(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PredictionQuery>,
) -> AppResult<Json<Prediction>> {
    let date = query.selected_date()?;
    let service = state.occupancy.clone();

    // Artifact reads are blocking file I/O
    let prediction = tokio::task::spawn_blocking(move || service.process(&name, date))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(prediction))
}

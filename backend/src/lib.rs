//! Car Park Finder - Backend
//!
//! Serves car park reference data and per-date occupancy forecasts to the
//! dashboard.

use std::sync::Arc;

use axum::{routing::get, Router};
use shared::ReferenceData;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod services;

pub use config::Config;

use error::{AppError, AppResult};
use repository::{CachedForecastRepository, ForecastRepository, LocalFileForecastRepository};
use services::OccupancyService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub occupancy: OccupancyService,
}

impl AppState {
    /// Build state from configuration: reference tables plus the
    /// file-backed forecast repository, cached if enabled.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let reference = match &config.reference.path {
            Some(path) => {
                tracing::info!("Loading reference data from {}", path.display());
                let json = std::fs::read_to_string(path).map_err(|e| {
                    AppError::Configuration(format!("cannot read {}: {}", path.display(), e))
                })?;
                ReferenceData::from_json(&json)?
            }
            None => ReferenceData::builtin()?,
        };

        let unmatched = reference.car_parks_without_capacity();
        if !unmatched.is_empty() {
            tracing::warn!("Car parks without a capacity entry: {:?}", unmatched);
        }

        let local = LocalFileForecastRepository::new(
            config.forecast.storage_root.clone(),
            config.forecast.format,
        );
        let forecasts: Arc<dyn ForecastRepository> = if config.forecast.cache_enabled {
            Arc::new(CachedForecastRepository::new(local))
        } else {
            Arc::new(local)
        };

        Ok(Self::new(config, Arc::new(reference), forecasts))
    }

    pub fn new(
        config: Config,
        reference: Arc<ReferenceData>,
        forecasts: Arc<dyn ForecastRepository>,
    ) -> Self {
        let occupancy = OccupancyService::new(reference, forecasts, config.map.clone());
        Self {
            config: Arc::new(config),
            occupancy,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Car Park Finder API v1.0"
}

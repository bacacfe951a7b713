//! Forecast repositories
//!
//! A repository turns a car park name into its [`ForecastSeries`]. The
//! local-file implementation reads one artifact per car park; the cache
//! wraps any repository; the in-memory one serves canned series in tests
//! and demos.

mod cache;
mod local;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use shared::{CarParkError, CarParkResult, ForecastSeries};

pub use cache::CachedForecastRepository;
pub use local::{ArtifactFormat, LocalFileForecastRepository};

/// Source of forecast series, one per car park
pub trait ForecastRepository: Send + Sync {
    /// Load the series for `car_park`.
    ///
    /// Returns `ArtifactNotFound` when there is nothing to load and
    /// `CorruptArtifact` when the stored data is unusable.
    fn load_forecast(&self, car_park: &str) -> CarParkResult<Arc<ForecastSeries>>;
}

impl<R: ForecastRepository + ?Sized> ForecastRepository for Arc<R> {
    fn load_forecast(&self, car_park: &str) -> CarParkResult<Arc<ForecastSeries>> {
        (**self).load_forecast(car_park)
    }
}

/// Repository serving series held in memory
#[derive(Debug, Default)]
pub struct InMemoryForecastRepository {
    series: HashMap<String, Arc<ForecastSeries>>,
    loads: AtomicUsize,
}

impl InMemoryForecastRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: ForecastSeries) -> Self {
        self.series
            .insert(series.car_park().to_string(), Arc::new(series));
        self
    }

    /// Number of successful and failed loads served so far
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

impl ForecastRepository for InMemoryForecastRepository {
    fn load_forecast(&self, car_park: &str) -> CarParkResult<Arc<ForecastSeries>> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        self.series
            .get(car_park)
            .cloned()
            .ok_or_else(|| CarParkError::artifact_not_found(car_park, "no in-memory series"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{normalize_date, ForecastPoint};

    fn series(name: &str) -> ForecastSeries {
        let timestamp = normalize_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        ForecastSeries::from_points(
            name,
            vec![ForecastPoint {
                timestamp,
                predicted_available: 10.0,
            }],
        )
        .unwrap()
    }

    #[test]
    fn test_in_memory_serves_canned_series() {
        let repo = InMemoryForecastRepository::new().with_series(series("Kiama Car Park"));
        let loaded = repo.load_forecast("Kiama Car Park").unwrap();
        assert_eq!(loaded.car_park(), "Kiama Car Park");
        assert_eq!(repo.load_count(), 1);
    }

    #[test]
    fn test_in_memory_missing_is_artifact_not_found() {
        let repo = InMemoryForecastRepository::new();
        let err = repo.load_forecast("Kiama Car Park").unwrap_err();
        assert_eq!(err.code(), "ARTIFACT_NOT_FOUND");
    }

    #[test]
    fn test_arc_delegates() {
        let repo: Arc<dyn ForecastRepository> =
            Arc::new(InMemoryForecastRepository::new().with_series(series("Gosford Car Park")));
        assert!(repo.load_forecast("Gosford Car Park").is_ok());
    }
}

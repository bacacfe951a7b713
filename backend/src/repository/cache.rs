//! Read-through forecast cache
//!
//! Uses `DashMap` so concurrent requests for different car parks don't
//! contend. Entries live until the process exits; failed loads are not
//! cached.

use std::sync::Arc;

use dashmap::DashMap;
use shared::{CarParkResult, ForecastSeries};

use super::ForecastRepository;

/// Caches series loaded by an inner repository, keyed by car park name
#[derive(Debug)]
pub struct CachedForecastRepository<R> {
    inner: R,
    entries: DashMap<String, Arc<ForecastSeries>>,
}

impl<R: ForecastRepository> CachedForecastRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<R: ForecastRepository> ForecastRepository for CachedForecastRepository<R> {
    fn load_forecast(&self, car_park: &str) -> CarParkResult<Arc<ForecastSeries>> {
        if let Some(entry) = self.entries.get(car_park) {
            tracing::trace!(car_park, "Forecast cache hit");
            return Ok(Arc::clone(entry.value()));
        }

        let series = self.inner.load_forecast(car_park)?;
        self.entries
            .insert(car_park.to_string(), Arc::clone(&series));
        Ok(series)
    }
}

//! Occupancy service: one "Process Data" action end to end

use std::sync::Arc;

use chrono::NaiveDate;
use shared::{
    calculate_occupancy, CarParkResult, MapMarker, MapView, OccupancyForecast, Prediction,
    PredictionResult, ReferenceData,
};

use crate::config::MapConfig;
use crate::repository::ForecastRepository;

/// Load the car park's series and derive occupancy for `date`
pub fn forecast_occupancy<R>(
    car_park: &str,
    date: NaiveDate,
    reference: &ReferenceData,
    forecasts: &R,
) -> CarParkResult<OccupancyForecast>
where
    R: ForecastRepository + ?Sized,
{
    let series = forecasts.load_forecast(car_park)?;
    calculate_occupancy(&series, date, reference)
}

/// Available, total and occupied spots for a car park on a date
pub fn compute<R>(
    car_park: &str,
    date: NaiveDate,
    reference: &ReferenceData,
    forecasts: &R,
) -> CarParkResult<PredictionResult>
where
    R: ForecastRepository + ?Sized,
{
    forecast_occupancy(car_park, date, reference, forecasts).map(|forecast| forecast.result)
}

/// Occupancy service for dashboard predictions
#[derive(Clone)]
pub struct OccupancyService {
    reference: Arc<ReferenceData>,
    forecasts: Arc<dyn ForecastRepository>,
    map: MapConfig,
}

impl OccupancyService {
    /// Create a new OccupancyService instance
    pub fn new(
        reference: Arc<ReferenceData>,
        forecasts: Arc<dyn ForecastRepository>,
        map: MapConfig,
    ) -> Self {
        Self {
            reference,
            forecasts,
            map,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn compute(&self, car_park: &str, date: NaiveDate) -> CarParkResult<PredictionResult> {
        compute(car_park, date, &self.reference, self.forecasts.as_ref())
    }

    /// Run a full action: validate the selection, compute the metrics and
    /// attach the map marker and re-centered view.
    pub fn process(&self, car_park: &str, date: NaiveDate) -> CarParkResult<Prediction> {
        let info = self.reference.get_car_park(car_park)?.clone();
        let forecast =
            forecast_occupancy(&info.name, date, &self.reference, self.forecasts.as_ref())?;

        tracing::info!(
            car_park = %info.name,
            %date,
            available = forecast.result.available,
            total = forecast.result.total,
            occupied = forecast.result.occupied,
            "Prediction computed"
        );

        Ok(Prediction {
            marker: MapMarker::for_car_park(&info, self.map.marker_radius),
            view: MapView::centered_on(&info, self.map.zoom),
            date,
            timestamp: forecast.timestamp,
            forecast_value: forecast.forecast_value,
            result: forecast.result,
            car_park: info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryForecastRepository;
    use shared::{normalize_date, CarParkError, ForecastPoint, ForecastSeries};

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    fn service(repo: InMemoryForecastRepository) -> OccupancyService {
        OccupancyService::new(
            Arc::new(ReferenceData::builtin().unwrap()),
            Arc::new(repo),
            MapConfig::default(),
        )
    }

    fn warriewood(value: f64) -> ForecastSeries {
        ForecastSeries::from_points(
            "Warriewood Car Park",
            vec![ForecastPoint {
                timestamp: normalize_date(may_first()),
                predicted_available: value,
            }],
        )
        .unwrap()
    }

    #[test]
    fn test_process_attaches_map_data() {
        let service = service(InMemoryForecastRepository::new().with_series(warriewood(50.0)));
        let prediction = service.process("Warriewood Car Park", may_first()).unwrap();

        assert_eq!(prediction.result.occupied, 194);
        assert_eq!(prediction.marker.latitude, -33.698);
        assert_eq!(prediction.marker.longitude, 151.301);
        assert_eq!(prediction.marker.radius_m, 100);
        assert_eq!(prediction.view.zoom, 10.2);
        assert_eq!(prediction.view.latitude, prediction.car_park.latitude);
    }

    #[test]
    fn test_process_unknown_car_park_skips_repository() {
        let repo = Arc::new(InMemoryForecastRepository::new());
        let service = OccupancyService::new(
            Arc::new(ReferenceData::builtin().unwrap()),
            repo.clone(),
            MapConfig::default(),
        );

        let err = service.process("Tallawong Station Car Park", may_first()).unwrap_err();
        assert!(matches!(err, CarParkError::CarParkNotFound(_)));
        assert_eq!(repo.load_count(), 0);
    }

    #[test]
    fn test_compute_missing_artifact() {
        let service = service(InMemoryForecastRepository::new());
        let err = service.compute("Warriewood Car Park", may_first()).unwrap_err();
        assert!(matches!(err, CarParkError::ArtifactNotFound { .. }));
    }
}

//! Prediction tests for the Car Park Finder
//!
//! Feature: car-park-finder
//! Tests for the forecast lookup and derived metrics including:
//! - Occupancy identity (occupied = total - available)
//! - Explicit failures for missing dates, artifacts and capacities
//! - Idempotence of repeated lookups

use std::fs;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use cpf_backend::repository::{ArtifactFormat, InMemoryForecastRepository, LocalFileForecastRepository};
use cpf_backend::services::{compute, OccupancyService};
use cpf_backend::config::MapConfig;
use proptest::prelude::*;
use shared::{
    normalize_date, CarParkError, CarParkInfo, ForecastPoint, ForecastSeries, PredictionResult,
    ReferenceData, SpotCapacity,
};

fn may_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn single_point(name: &str, date: NaiveDate, value: f64) -> ForecastSeries {
    ForecastSeries::from_points(
        name,
        vec![ForecastPoint {
            timestamp: normalize_date(date),
            predicted_available: value,
        }],
    )
    .unwrap()
}

// ============================================================================
// Scenarios
// ============================================================================

#[cfg(test)]
mod scenarios {
    use super::*;

    /// Warriewood has 244 spots; 50 available means 194 occupied
    #[test]
    fn test_warriewood_occupancy() {
        let reference = ReferenceData::builtin().unwrap();
        let repo = InMemoryForecastRepository::new()
            .with_series(single_point("Warriewood Car Park", may_first(), 50.0));

        let result = compute("Warriewood Car Park", may_first(), &reference, &repo).unwrap();
        assert_eq!(
            result,
            PredictionResult {
                available: 50,
                total: 244,
                occupied: 194,
            }
        );
    }

    /// A location-table name with no capacity entry fails explicitly
    #[test]
    fn test_capacity_name_mismatch() {
        let reference = ReferenceData::new(
            vec![
                CarParkInfo::new("Tallawong P1 Car Park", -33.69163, 150.906022),
                CarParkInfo::new("Kellyville North Car Park", -33.713514, 150.935304),
            ],
            vec![
                SpotCapacity::new("Tallawong Station Car Park", 1004),
                SpotCapacity::new("Kellyville Station Car Park", 1374),
            ],
        )
        .unwrap();
        let repo = InMemoryForecastRepository::new()
            .with_series(single_point("Tallawong P1 Car Park", may_first(), 80.0));

        let err = compute("Tallawong P1 Car Park", may_first(), &reference, &repo).unwrap_err();
        assert_eq!(
            err,
            CarParkError::CapacityNotFound("Tallawong P1 Car Park".to_string())
        );
    }

    #[test]
    fn test_date_outside_series() {
        let reference = ReferenceData::builtin().unwrap();
        let repo = InMemoryForecastRepository::new()
            .with_series(single_point("Warriewood Car Park", may_first(), 50.0));
        let next_day = may_first() + Duration::days(1);

        let err = compute("Warriewood Car Park", next_day, &reference, &repo).unwrap_err();
        assert!(matches!(err, CarParkError::ForecastUnavailable { .. }));
    }

    #[test]
    fn test_no_artifact_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let reference = ReferenceData::builtin().unwrap();
        let repo = LocalFileForecastRepository::new(dir.path(), ArtifactFormat::Csv);

        let err = compute("Gosford Car Park", may_first(), &reference, &repo).unwrap_err();
        assert!(matches!(err, CarParkError::ArtifactNotFound { .. }));
    }

    #[test]
    fn test_full_action_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Gosford Car Park.csv"),
            "ds_forecast,yhat_Gosford Car Park\n2024-05-01 00:00:00,356.5\n",
        )
        .unwrap();
        let service = OccupancyService::new(
            Arc::new(ReferenceData::builtin().unwrap()),
            Arc::new(LocalFileForecastRepository::new(dir.path(), ArtifactFormat::Csv)),
            MapConfig::default(),
        );

        let prediction = service.process("Gosford Car Park", may_first()).unwrap();
        // 356.5 rounds to even
        assert_eq!(prediction.result.available, 356);
        assert_eq!(prediction.result.total, 1057);
        assert_eq!(prediction.result.occupied, 701);
        assert_eq!(prediction.forecast_value, 356.5);
        assert_eq!(prediction.car_park.name, "Gosford Car Park");
    }

    #[test]
    fn test_failed_lookup_leaves_service_ready() {
        let repo = InMemoryForecastRepository::new()
            .with_series(single_point("Kiama Car Park", may_first(), 10.0));
        let service = OccupancyService::new(
            Arc::new(ReferenceData::builtin().unwrap()),
            Arc::new(repo),
            MapConfig::default(),
        );

        assert!(service.process("Gosford Car Park", may_first()).is_err());
        let result = service.compute("Kiama Car Park", may_first()).unwrap();
        assert_eq!(result.occupied, 32);
    }
}

// ============================================================================
// Property: Repeated Lookups Are Idempotent
// ============================================================================
// For any car park and forecast value, calling compute twice with the same
// inputs yields the same result and loads the artifact each time.

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn property_compute_idempotent(
        car_park_index in 0usize..28,
        value in 0.0f64..2000.0,
        offset_days in 0i64..730,
    ) {
        let reference = ReferenceData::builtin().unwrap();
        let name = reference.list_car_park_names()[car_park_index].to_string();
        let date = may_first() + Duration::days(offset_days);
        let repo = InMemoryForecastRepository::new().with_series(single_point(&name, date, value));

        let first = compute(&name, date, &reference, &repo).unwrap();
        let second = compute(&name, date, &reference, &repo).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first.occupied, i64::from(first.total) - first.available);
        prop_assert_eq!(repo.load_count(), 2);
    }
}

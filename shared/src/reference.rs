//! Reference data store
//!
//! Two immutable tables: car park locations and facility capacities. They
//! are matched by exact name only; the tables are known to disagree on a
//! few names and no reconciliation is attempted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CarParkError, CarParkResult};
use crate::models::{CarParkInfo, SpotCapacity};
use crate::validation::validate_car_park_name;

/// Built-in car park locations as `(name, latitude, longitude)`
pub const BUILTIN_CAR_PARKS: &[(&str, f64, f64)] = &[
    ("Warriewood Car Park", -33.697777, 151.300667),
    ("Narrabeen Car Park", -33.713514, 151.297315),
    ("Mona Vale Car Park", -33.677276, 151.305146),
    ("Dee Why Car Park", -33.752797, 151.286485),
    ("West Ryde Car Park", -33.807172, 151.090229),
    ("Sutherland East Parade Car Park", -34.031787, 151.05719),
    ("Leppington Car Park", -33.9544, 150.8081),
    ("Edmondson Park South Car Park", -33.9693, 150.8587),
    ("St Marys Car Park", -33.762256, 150.776029),
    ("Campbelltown Farrow Rd North Car Park", -34.063835, 150.813929),
    ("Campbelltown Hurley Street South Car Park", -34.063835, 150.813929),
    ("Penrith Combewood At-Grade Car Park", -33.750055, 150.696135),
    ("Penrith Combewood Multi-Level Car Park", -33.750055, 150.696135),
    ("Warwick Farm Car Park", -33.91345, 150.935036),
    ("Schofields Car Park", -33.704477, 150.873817),
    ("Hornsby Jersey St Car Park", -33.702801, 151.098494),
    ("Tallawong P1 Car Park", -33.69163, 150.906022),
    ("Tallawong P2 Car Park", -33.69163, 150.906022),
    ("Tallawong P3 Car Park", -33.69163, 150.906022),
    ("Kellyville North Car Park", -33.713514, 150.935304),
    ("Kellyville South Car Park", -33.713514, 150.935304),
    ("Bella Vista Car Park", -33.730592, 150.944024),
    ("Hills Showground Car Park", -33.72782, 150.987345),
    ("Cherrybrook Car Park", -33.736703, 151.031977),
    ("Gordon Henry St North Car Park", -33.756009, 151.154528),
    ("Kiama Car Park", -34.672518, 150.854695),
    ("Gosford Car Park", -33.423883, 151.341711),
    ("Revesby Car Park", -33.95246, 151.014838),
];

/// Built-in facility capacities as `(facility name, total spots)`
pub const BUILTIN_CAPACITIES: &[(&str, u32)] = &[
    ("Tallawong Station Car Park", 1004),
    ("Warriewood Car Park", 244),
    ("Narrabeen Car Park", 46),
    ("Mona Vale Car Park", 68),
    ("Dee Why Car Park", 117),
    ("West Ryde Car Park", 151),
    ("Sutherland East Parade Car Park", 373),
    ("Leppington Car Park", 1884),
    ("Edmondson Park South Car Park", 1429),
    ("St Marys Car Park", 682),
    ("Campbelltown Farrow Rd North Car Park", 68),
    ("Kellyville Station Car Park", 1374),
    ("Campbelltown Hurley Street South Car Park", 118),
    ("Penrith Combewood At-Grade Car Park", 230),
    ("Penrith Combewood Multi-Level Car Park", 1144),
    ("Warwick Farm Car Park", 910),
    ("Schofields Car Park", 700),
    ("Hornsby Jersey St Car Park", 145),
    ("Tallawong P1 Car Park", 121),
    ("Tallawong P2 Car Park", 455),
    ("Tallawong P3 Car Park", 397),
    ("Kellyville North Car Park", 351),
    ("Bella Vista Station Car Park", 800),
    ("Kellyville South Car Park", 964),
    ("Bella Vista Car Park", 777),
    ("Hills Showground Car Park", 584),
    ("Cherrybrook Car Park", 384),
    ("Hills Showground Station Car Park", 600),
    ("Ashfield Car Park", 228),
    ("Kogarah Car Park", 259),
    ("Seven Hills Car Park", 1613),
    ("Manly Vale Car Park", 142),
    ("Brookvale Car Park", 246),
    ("Cherrybrook Station Car Park", 400),
    ("Gordon Henry St North Car Park", 213),
    ("Kiama Car Park", 42),
    ("Gosford Car Park", 1057),
    ("Revesby Car Park", 934),
];

/// On-disk layout of a replacement reference dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDataset {
    pub car_parks: Vec<CarParkInfo>,
    pub capacities: Vec<SpotCapacity>,
}

/// Immutable lookup tables for car parks and their capacities
#[derive(Debug, Clone)]
pub struct ReferenceData {
    car_parks: Vec<CarParkInfo>,
    capacities: Vec<SpotCapacity>,
    car_park_index: HashMap<String, usize>,
    capacity_index: HashMap<String, usize>,
}

impl ReferenceData {
    /// Build the store. Coordinates are rounded to display precision here
    /// and never again.
    pub fn new(car_parks: Vec<CarParkInfo>, capacities: Vec<SpotCapacity>) -> CarParkResult<Self> {
        let mut rounded = Vec::with_capacity(car_parks.len());
        let mut car_park_index = HashMap::with_capacity(car_parks.len());

        for car_park in car_parks {
            validate_car_park_name(&car_park.name)
                .map_err(|e| CarParkError::InvalidReferenceData(format!("{}: {:?}", e, car_park.name)))?;
            if !car_park.coordinates().is_valid() {
                return Err(CarParkError::InvalidReferenceData(format!(
                    "coordinates out of range for {}",
                    car_park.name
                )));
            }
            if car_park_index.contains_key(&car_park.name) {
                return Err(CarParkError::DuplicateCarPark(car_park.name));
            }

            let coordinates = car_park.coordinates().rounded();
            car_park_index.insert(car_park.name.clone(), rounded.len());
            rounded.push(CarParkInfo {
                name: car_park.name,
                latitude: coordinates.latitude,
                longitude: coordinates.longitude,
            });
        }

        let mut capacity_index = HashMap::with_capacity(capacities.len());
        for (position, capacity) in capacities.iter().enumerate() {
            validate_car_park_name(&capacity.facility_name).map_err(|e| {
                CarParkError::InvalidReferenceData(format!("{}: {:?}", e, capacity.facility_name))
            })?;
            if capacity_index
                .insert(capacity.facility_name.clone(), position)
                .is_some()
            {
                return Err(CarParkError::DuplicateFacility(
                    capacity.facility_name.clone(),
                ));
            }
        }

        Ok(Self {
            car_parks: rounded,
            capacities,
            car_park_index,
            capacity_index,
        })
    }

    /// The dataset compiled into the binary
    pub fn builtin() -> CarParkResult<Self> {
        let car_parks = BUILTIN_CAR_PARKS
            .iter()
            .map(|(name, latitude, longitude)| CarParkInfo::new(*name, *latitude, *longitude))
            .collect();
        let capacities = BUILTIN_CAPACITIES
            .iter()
            .map(|(name, spots)| SpotCapacity::new(*name, *spots))
            .collect();
        Self::new(car_parks, capacities)
    }

    /// Build from a JSON [`ReferenceDataset`] document
    pub fn from_json(json: &str) -> CarParkResult<Self> {
        let dataset: ReferenceDataset = serde_json::from_str(json)
            .map_err(|e| CarParkError::InvalidReferenceData(e.to_string()))?;
        Self::new(dataset.car_parks, dataset.capacities)
    }

    pub fn get_car_park(&self, name: &str) -> CarParkResult<&CarParkInfo> {
        self.car_park_index
            .get(name)
            .map(|&i| &self.car_parks[i])
            .ok_or_else(|| CarParkError::CarParkNotFound(name.to_string()))
    }

    pub fn get_capacity(&self, facility_name: &str) -> CarParkResult<&SpotCapacity> {
        self.capacity_index
            .get(facility_name)
            .map(|&i| &self.capacities[i])
            .ok_or_else(|| CarParkError::CapacityNotFound(facility_name.to_string()))
    }

    /// Names for the car park selector, in dataset order
    pub fn list_car_park_names(&self) -> Vec<&str> {
        self.car_parks.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn car_parks(&self) -> &[CarParkInfo] {
        &self.car_parks
    }

    pub fn capacities(&self) -> &[SpotCapacity] {
        &self.capacities
    }

    /// Car parks whose name has no entry in the capacity table
    pub fn car_parks_without_capacity(&self) -> Vec<&str> {
        self.car_parks
            .iter()
            .filter(|c| !self.capacity_index.contains_key(&c.name))
            .map(|c| c.name.as_str())
            .collect()
    }
}

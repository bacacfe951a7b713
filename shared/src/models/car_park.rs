//! Car park reference models

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// A car park that can be selected on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarParkInfo {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CarParkInfo {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn coordinates(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }
}

/// Total parking spots of a facility
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpotCapacity {
    pub facility_name: String,
    pub total_spots: u32,
}

impl SpotCapacity {
    pub fn new(facility_name: impl Into<String>, total_spots: u32) -> Self {
        Self {
            facility_name: facility_name.into(),
            total_spots,
        }
    }
}

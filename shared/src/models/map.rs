//! Map layer models consumed by the dashboard map

use serde::{Deserialize, Serialize};

use crate::models::CarParkInfo;
use crate::types::{GpsCoordinates, Rgb};

pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v12";
pub const DEFAULT_ZOOM: f64 = 10.2;
pub const DEFAULT_MARKER_RADIUS_M: u32 = 100;

/// Greater Sydney, where all known car parks are
pub const DEFAULT_CENTER: GpsCoordinates = GpsCoordinates {
    latitude: -33.8,
    longitude: 151.07,
};

/// Camera position of the map
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
}

impl MapView {
    pub fn new(center: GpsCoordinates, zoom: f64) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            zoom,
            bearing: 0.0,
            pitch: 0.0,
        }
    }

    /// Re-center on a selected car park
    pub fn centered_on(car_park: &CarParkInfo, zoom: f64) -> Self {
        Self::new(car_park.coordinates(), zoom)
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}

/// Scatter marker drawn at a car park
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapMarker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: u32,
    pub fill_color: Rgb,
}

impl MapMarker {
    pub fn for_car_park(car_park: &CarParkInfo, radius_m: u32) -> Self {
        Self {
            name: car_park.name.clone(),
            latitude: car_park.latitude,
            longitude: car_park.longitude,
            radius_m,
            fill_color: Rgb::RED,
        }
    }
}

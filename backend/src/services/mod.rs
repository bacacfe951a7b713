//! Business logic services for the Car Park Finder

pub mod occupancy;

pub use occupancy::{compute, forecast_occupancy, OccupancyService};

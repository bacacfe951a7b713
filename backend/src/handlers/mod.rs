//! HTTP handlers for the Car Park Finder API

pub mod car_park;
pub mod health;
pub mod map;
pub mod prediction;

pub use car_park::*;
pub use health::*;
pub use map::*;
pub use prediction::*;

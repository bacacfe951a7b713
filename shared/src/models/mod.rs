//! Domain models for the Car Park Finder

mod car_park;
mod forecast;
mod map;
mod prediction;

pub use car_park::*;
pub use forecast::*;
pub use map::*;
pub use prediction::*;

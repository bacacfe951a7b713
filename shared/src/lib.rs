//! Shared types and models for the Car Park Finder
//!
//! This crate contains the reference dataset, forecast series and occupancy
//! arithmetic shared between the backend, the browser (via WASM), and tests.

pub mod error;
pub mod models;
pub mod occupancy;
pub mod reference;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use occupancy::*;
pub use reference::*;
pub use types::*;
pub use validation::*;

//! Domain model types for grid routing.
//!
//! Provides the geography of an instance (scaled locations around a single
//! depot plus the fleet size) and the per-vehicle route records produced
//! when an assignment is read back.

mod geography;
mod location;
mod route;

pub use geography::Geography;
pub use location::{Location, ScaleFactor};
pub use route::VehicleRoute;

//! Coordinates domain module (city/country locations referenced by users).

pub mod coordinate;
pub mod store;

pub use coordinate::{Coordinate, CoordinateDraft};
pub use store::CoordinateStore;

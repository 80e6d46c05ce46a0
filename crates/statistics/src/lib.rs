//! Party-membership statistics.
//!
//! Joins coordinates → users → parties and counts members per party name for
//! a city or a country. Read-only over the injected stores.

pub mod aggregate;
pub mod engine;

pub use aggregate::{GeoFilter, PartyAggregate, Tally};
pub use engine::StatisticsEngine;

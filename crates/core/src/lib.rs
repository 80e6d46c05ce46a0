//! `civicstats-core`: shared building blocks for the directory entities.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, Record};
pub use error::{DomainError, DomainResult, StoreError, StoreResult};
pub use id::{CoordinateId, PartyId, UserId};

//! Infrastructure layer: store adapters, CRUD services, config.

pub mod config;
pub mod services;
pub mod store;

//! Store adapters implementing the entity ports.

pub mod in_memory;

pub use in_memory::{
    InMemoryCoordinateStore, InMemoryPartyStore, InMemoryStore, InMemoryUserStore,
};

//! Parties domain module (named political affiliations).
//!
//! Entity + draft validation + the storage port. No IO lives here.

pub mod party;
pub mod store;

pub use party::{Party, PartyDraft};
pub use store::PartyStore;

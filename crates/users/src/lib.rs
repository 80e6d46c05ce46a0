//! Users domain module.
//!
//! A user points at exactly one coordinate and at most one party. Neither
//! reference is checked on write.

pub mod store;
pub mod user;

pub use store::UserStore;
pub use user::{User, UserDraft};

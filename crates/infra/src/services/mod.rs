//! CRUD use-case services.
//!
//! Thin façades over the store ports: they delegate every call and add only
//! existence reporting and mutation logging.

pub mod coordinates;
pub mod parties;
pub mod users;

pub use coordinates::CoordinateService;
pub use parties::PartyService;
pub use users::UserService;

use axum::Router;

pub mod coordinates;
pub mod parties;
pub mod statistics;
pub mod system;
pub mod users;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/parties", parties::router())
        .nest("/coordinates", coordinates::router())
        .nest("/users", users::router())
        .nest("/statistics", statistics::router())
}

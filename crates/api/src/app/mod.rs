//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store + service wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and their mapping to domain drafts
//! - `errors.rs`: consistent error responses
//! - `openapi.rs`: generated OpenAPI document, served with Swagger UI

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod openapi;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: services::AppServices) -> Router {
    let services = Arc::new(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .merge(SwaggerUi::new("/api-docs").url(openapi::OPENAPI_JSON_PATH, openapi::ApiDoc::openapi()))
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_logging)))
}

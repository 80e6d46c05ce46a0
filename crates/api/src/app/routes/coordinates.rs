use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use civicstats_coordinates::Coordinate;
use civicstats_core::{CoordinateId, Entity};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_coordinates).post(create_coordinate))
        .route(
            "/:id",
            get(get_coordinate).put(update_coordinate).delete(delete_coordinate),
        )
}

/// `GET /coordinates`, narrowed by `?city=` or else `?country=`.
#[utoipa::path(
    get,
    path = "/coordinates",
    params(dto::CoordinateQuery),
    responses(
        (status = 200, description = "Matching coordinates", body = [Coordinate]),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn list_coordinates(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::CoordinateQuery>,
) -> axum::response::Response {
    let listed = match (query.city(), query.country()) {
        (Some(city), _) => services.coordinates.list_by_city(city),
        (None, Some(country)) => services.coordinates.list_by_country(country),
        (None, None) => services.coordinates.list(),
    };

    match listed {
        Ok(coordinates) => (StatusCode::OK, Json(coordinates)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Responds with the new id only.
#[utoipa::path(
    post,
    path = "/coordinates",
    request_body = dto::CoordinateRequest,
    responses(
        (status = 201, description = "Coordinate created; body holds only the new `id`"),
        (status = 400, description = "Missing field or malformed body")
    )
)]
pub async fn create_coordinate(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CoordinateRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.coordinates.create(draft) {
        Ok(coordinate) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "id": coordinate.id() })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/coordinates/{id}",
    params(("id" = String, Path, description = "Coordinate id")),
    responses(
        (status = 200, description = "Coordinate found", body = Coordinate),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn get_coordinate(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.coordinates.get(&CoordinateId::from(id)) {
        Ok(Some(coordinate)) => (StatusCode::OK, Json(coordinate)).into_response(),
        Ok(None) => errors::not_found("coordinate"),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/coordinates/{id}",
    params(("id" = String, Path, description = "Coordinate id")),
    request_body = dto::CoordinateRequest,
    responses(
        (status = 200, description = "Coordinate replaced", body = Coordinate),
        (status = 400, description = "Missing field or malformed body"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn update_coordinate(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::CoordinateRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.coordinates.update(&CoordinateId::from(id), draft) {
        Ok(Some(coordinate)) => (StatusCode::OK, Json(coordinate)).into_response(),
        Ok(None) => errors::not_found("coordinate"),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/coordinates/{id}",
    params(("id" = String, Path, description = "Coordinate id")),
    responses(
        (status = 204, description = "Coordinate deleted"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn delete_coordinate(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.coordinates.delete(&CoordinateId::from(id)) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::not_found("coordinate"),
        Err(e) => errors::store_error_to_response(e),
    }
}

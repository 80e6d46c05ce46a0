use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use civicstats_core::UserId;
use civicstats_users::User;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// `GET /users`, or the first user with `?email=`.
#[utoipa::path(
    get,
    path = "/users",
    params(dto::UserQuery),
    responses(
        (status = 200, description = "All users, or the one matching `email`", body = [User]),
        (status = 404, description = "No user with that email"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::UserQuery>,
) -> axum::response::Response {
    if let Some(email) = query.email() {
        return match services.users.get_by_email(email) {
            Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
            Ok(None) => errors::not_found("user"),
            Err(e) => errors::store_error_to_response(e),
        };
    }

    match services.users.list() {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = dto::UserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing field or malformed body")
    )
)]
pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::UserRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.users.create(draft) {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.users.get(&UserId::from(id)) {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => errors::not_found("user"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Full replace: an omitted `party_id` clears the affiliation.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = dto::UserRequest,
    responses(
        (status = 200, description = "User replaced", body = User),
        (status = 400, description = "Missing field or malformed body"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UserRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.users.update(&UserId::from(id), draft) {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => errors::not_found("user"),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.users.delete(&UserId::from(id)) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::not_found("user"),
        Err(e) => errors::store_error_to_response(e),
    }
}

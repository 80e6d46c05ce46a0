use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use civicstats_core::PartyId;
use civicstats_parties::Party;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_parties).post(create_party))
        .route("/:id", get(get_party).put(update_party).delete(delete_party))
}

/// `GET /parties`, or the first party with `?name=`.
#[utoipa::path(
    get,
    path = "/parties",
    params(dto::PartyQuery),
    responses(
        (status = 200, description = "All parties, or the one matching `name`", body = [Party]),
        (status = 404, description = "No party with that name"),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn list_parties(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PartyQuery>,
) -> axum::response::Response {
    if let Some(name) = query.name() {
        return match services.parties.get_by_name(name) {
            Ok(Some(party)) => (StatusCode::OK, Json(party)).into_response(),
            Ok(None) => errors::not_found("party"),
            Err(e) => errors::store_error_to_response(e),
        };
    }

    match services.parties.list() {
        Ok(parties) => (StatusCode::OK, Json(parties)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/parties",
    request_body = dto::PartyRequest,
    responses(
        (status = 201, description = "Party created", body = Party),
        (status = 400, description = "Missing name or malformed body")
    )
)]
pub async fn create_party(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::PartyRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.parties.create(draft) {
        Ok(party) => (StatusCode::CREATED, Json(party)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/parties/{id}",
    params(("id" = String, Path, description = "Party id")),
    responses(
        (status = 200, description = "Party found", body = Party),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn get_party(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.parties.get(&PartyId::from(id)) {
        Ok(Some(party)) => (StatusCode::OK, Json(party)).into_response(),
        Ok(None) => errors::not_found("party"),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    put,
    path = "/parties/{id}",
    params(("id" = String, Path, description = "Party id")),
    request_body = dto::PartyRequest,
    responses(
        (status = 200, description = "Party replaced", body = Party),
        (status = 400, description = "Missing name or malformed body"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn update_party(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::PartyRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let draft = match body.into_draft() {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.parties.update(&PartyId::from(id), draft) {
        Ok(Some(party)) => (StatusCode::OK, Json(party)).into_response(),
        Ok(None) => errors::not_found("party"),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/parties/{id}",
    params(("id" = String, Path, description = "Party id")),
    responses(
        (status = 204, description = "Party deleted"),
        (status = 404, description = "Unknown id")
    )
)]
pub async fn delete_party(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.parties.delete(&PartyId::from(id)) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => errors::not_found("party"),
        Err(e) => errors::store_error_to_response(e),
    }
}

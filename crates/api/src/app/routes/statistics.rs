use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use civicstats_statistics::PartyAggregate;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/city/:city", get(statistics_by_city))
        .route("/country/:country", get(statistics_by_country))
}

/// Party member counts for one city. Unknown cities yield `[]`.
#[utoipa::path(
    get,
    path = "/statistics/city/{city}",
    params(("city" = String, Path, description = "Exact, case-sensitive city name")),
    responses(
        (status = 200, description = "One record per party name", body = [PartyAggregate]),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn statistics_by_city(
    Extension(services): Extension<Arc<AppServices>>,
    Path(city): Path<String>,
) -> axum::response::Response {
    match services.statistics.statistics_by_city(&city) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/statistics/country/{country}",
    params(("country" = String, Path, description = "Exact, case-sensitive country name")),
    responses(
        (status = 200, description = "One record per party name", body = [PartyAggregate]),
        (status = 503, description = "Store unavailable")
    )
)]
pub async fn statistics_by_country(
    Extension(services): Extension<Arc<AppServices>>,
    Path(country): Path<String>,
) -> axum::response::Response {
    match services.statistics.statistics_by_country(&country) {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

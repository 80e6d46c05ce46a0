use axum::http::StatusCode;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> StatusCode {
    StatusCode::OK
}

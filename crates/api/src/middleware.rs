use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag each request with a fresh id and log its outcome.
///
/// The id is echoed back in `x-request-id`.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let started = Instant::now();
    let span = tracing::info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path(),
    );

    let mut response = next.run(req).instrument(span.clone()).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        parent: &span,
        status = response.status().as_u16(),
        elapsed_ms = elapsed_millis(started.elapsed()),
        "request completed"
    );

    response
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

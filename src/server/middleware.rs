//! Request ids and access logging.
//!
//! Request ids are assigned by `tower-http`'s request-id layers (see
//! [`super::router`]) after [`strip_client_request_id`] has removed any id the
//! client sent. [`access_log`] records one structured event per request
//! carrying that id.

use std::time::{Duration, Instant};

use axum::{extract::Request, middleware::Next, response::Response};
use tower_http::request_id::RequestId;

/// Header carrying the request id on responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Placeholder logged when a request has no id.
pub const MISSING_REQUEST_ID: &str = "-";

/// Removes any client-supplied `x-request-id` so the server always generates
/// a fresh one.
pub async fn strip_client_request_id(mut request: Request) -> Request {
    request.headers_mut().remove(REQUEST_ID_HEADER);
    request
}

/// Returns the request id as text, or `-` when absent or not valid UTF-8.
pub fn request_id_str(id: Option<&RequestId>) -> &str {
    id.and_then(|id| id.header_value().to_str().ok())
        .unwrap_or(MISSING_REQUEST_ID)
}

/// Logs method, path, status, duration and request id once the response is
/// ready.
pub async fn access_log(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request_id_str(request.extensions().get::<RequestId>()).to_owned();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        duration_ms = duration_ms(started.elapsed()),
        %request_id,
        "request completed"
    );

    response
}

/// Milliseconds rounded to two decimals.
fn duration_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}

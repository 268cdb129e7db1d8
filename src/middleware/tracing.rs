// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span and stamps the request id onto error bodies

use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use helena_core::errors::ErrorResponse;
use tracing::{warn, Span};

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create a tracing span for an HTTP request
///
/// The request id is read from `x-request-id`, which the request-id layer
/// sets before this span is created.
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Copy the request id into the body of error responses
///
/// Runs inside the request-id layer. Only responses produced from an
/// `AppError` are touched; they carry their [`ErrorResponse`] as an extension.
pub async fn attach_request_id(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned);

    let mut response = next.run(request).await;
    let Some(request_id) = request_id else {
        return response;
    };
    let Some(error) = response.extensions_mut().remove::<ErrorResponse>() else {
        return response;
    };

    match serde_json::to_vec(&error.with_request_id(request_id)) {
        Ok(bytes) => {
            response.headers_mut().remove(header::CONTENT_LENGTH);
            *response.body_mut() = Body::from(bytes);
        }
        Err(e) => warn!("Failed to serialize error body with request id: {e}"),
    }
    response
}

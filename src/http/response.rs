//! Response construction.
//!
//! # Responsibilities
//! - Build `302 Found` redirects with a `Location` header
//! - Provide the default "not found" fallback
//!
//! # Design Decisions
//! - The redirect itself writes no body
//! - A destination that cannot be encoded as a header value yields
//!   500 rather than a malformed response

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// `302 Found` pointing at `location`, with an empty body.
pub fn found(location: &str) -> Response {
    found_with_body(location, Body::empty())
}

/// `302 Found` pointing at `location`, carrying `body`.
pub fn found_with_body(location: &str, body: Body) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)], body).into_response(),
        Err(e) => {
            tracing::error!(location = %location, error = %e, "Redirect target is not a valid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Default fallback handler for unmapped paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found\n")
}

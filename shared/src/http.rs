//! HTTP helpers for Lambda functions.

use lambda_http::{Body, Response};

use crate::Error;

/// Create a plain-text response with the given status code.
pub fn text_response(
    status: u16,
    body: impl Into<String>,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::from(body.into()))
        .expect("Failed to build response"))
}

/// Create the success response carrying the calendar document.
///
/// `max_age` drives the `s-maxage` directive so shared caches keep serving
/// the feed between regenerations.
pub fn calendar_response(
    ics: String,
    max_age: u64,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(Response::builder()
        .status(200)
        .header("content-type", "text/calendar; charset=utf-8")
        .header("cache-control", format!("s-maxage={}", max_age))
        .body(Body::from(ics))
        .expect("Failed to build response"))
}

/// Map a feed error to its HTTP response.
pub fn error_response(error: &Error) -> Result<Response<Body>, lambda_http::Error> {
    text_response(error.status_code(), error.to_string())
}

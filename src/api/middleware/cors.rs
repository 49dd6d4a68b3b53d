//! Cross-origin resource sharing policy.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

const MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Builds the CORS layer for the given origins.
///
/// `*` anywhere in the list allows every origin. Origins that are not valid
/// header values are skipped with a warning.
pub fn layer(origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .expose_headers([HeaderName::from_static("content-length")])
        .max_age(MAX_AGE)
}

fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }

    let values: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(values)
}

pub mod metrics;
pub mod security_headers;
pub mod tracing;

use axum::{Router, extract::DefaultBodyLimit, middleware::from_fn};

/// Wrap a router with the layers every service runs: metrics, request ids,
/// request spans and security headers. Request bodies are not size capped.
pub fn apply_common_layers(router: Router) -> Router {
    router
        .layer(DefaultBodyLimit::disable())
        .layer(from_fn(metrics::metrics_middleware))
        .layer(from_fn(security_headers::security_headers_middleware))
        .layer(tracing::http_trace_layer())
        .layer(from_fn(tracing::request_id_middleware))
}

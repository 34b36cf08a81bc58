//! HTTP handlers for grammar-service.

pub mod grammar;
pub mod health;
pub mod metrics;

use axum::http::Uri;
use service_core::error::AppError;

pub use grammar::check_grammar;
pub use health::{health_check, readiness_check};
pub use metrics::metrics;

pub async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}

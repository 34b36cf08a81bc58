//! HTTP handlers for ai-service.

pub mod health;
pub mod metrics;
pub mod text;

use axum::http::Uri;
use service_core::error::AppError;

pub use health::{health_check, readiness_check, root_status};
pub use metrics::metrics;
pub use text::{spellcheck, summarize};

pub async fn fallback(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}

//! Application startup and lifecycle management.

use crate::config::AiConfig;
use crate::handlers;
use crate::services::{PlaceholderAnalyzer, TextAnalyzer};
use crate::ApiDoc;
use axum::{
    routing::{get, post},
    Json, Router,
};
use service_core::error::AppError;
use service_core::middleware::apply_common_layers;
use service_core::server::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use utoipa::OpenApi;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AiConfig,
    pub analyzer: Arc<dyn TextAnalyzer>,
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root_status))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route("/api/ai/summarize", post(handlers::summarize))
        .route("/api/ai/spellcheck", post(handlers::spellcheck));

    if state.config.docs.enabled {
        let mut doc = ApiDoc::openapi();
        doc.info.title = state.config.docs.title.clone();
        router = router.route(
            "/openapi.json",
            get(move || {
                let doc = doc.clone();
                async move { Json(doc) }
            }),
        );
    }

    let router = router.fallback(handlers::fallback).with_state(state);

    apply_common_layers(router)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the placeholder analyzer.
    pub async fn build(config: AiConfig) -> Result<Self, AppError> {
        Self::build_with_analyzer(config, Arc::new(PlaceholderAnalyzer)).await
    }

    pub async fn build_with_analyzer(
        config: AiConfig,
        analyzer: Arc<dyn TextAnalyzer>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let addr = config.common.bind_address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            docs_enabled = config.docs.enabled,
            "AI service: HTTP on port {}",
            port
        );

        let router = build_router(AppState { config, analyzer });

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

//! Application startup and lifecycle management.

use crate::config::GrammarConfig;
use crate::handlers;
use crate::services::{GrammarChecker, PlaceholderGrammarChecker};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::apply_common_layers;
use service_core::server::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: GrammarConfig,
    pub checker: Arc<dyn GrammarChecker>,
}

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/check-grammar", post(handlers::check_grammar))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .fallback(handlers::fallback)
        .with_state(state);

    apply_common_layers(router)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the placeholder checker.
    pub async fn build(config: GrammarConfig) -> Result<Self, AppError> {
        Self::build_with_checker(config, Arc::new(PlaceholderGrammarChecker)).await
    }

    pub async fn build_with_checker(
        config: GrammarConfig,
        checker: Arc<dyn GrammarChecker>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for testing
        let addr = config.common.bind_address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(service = %config.service_name, "Grammar service: HTTP on port {}", port);

        let router = build_router(AppState { config, checker });

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

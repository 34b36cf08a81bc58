use ai_service::config::{AiConfig, DocsConfig};
use ai_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub http_address: String,
    pub client: reqwest::Client,
}

pub fn test_config(docs_enabled: bool) -> AiConfig {
    AiConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            log_level: "debug".to_string(),
            otlp_endpoint: None,
        },
        docs: DocsConfig {
            enabled: docs_enabled,
            title: "AI Service Test".to_string(),
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config(true)).await
    }

    pub async fn spawn_with(config: AiConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let http_address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            client,
        }
    }

    #[allow(dead_code)]
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.http_address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

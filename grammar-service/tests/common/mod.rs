use grammar_service::config::GrammarConfig;
use grammar_service::startup::Application;
use service_core::config::Config as CoreConfig;

pub struct TestApp {
    pub http_address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = GrammarConfig {
            common: CoreConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
                log_level: "debug".to_string(),
                otlp_endpoint: None,
            },
            service_name: "grammar-service".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let http_address = format!("http://127.0.0.1:{}", app.port());

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

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.http_address, path)
    }
}

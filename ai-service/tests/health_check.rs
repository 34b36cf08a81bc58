mod common;

use common::{test_config, TestApp};

#[tokio::test]
async fn root_reports_running_status() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/", app.http_address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!({ "status": "AI Service is running" }));
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.http_address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "ai-service");
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/ready", app.http_address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    service_core::observability::init_metrics();
    let app = TestApp::spawn().await;

    // Generate at least one recorded request
    app.client
        .get(format!("{}/", app.http_address))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .client
        .get(format!("{}/metrics", app.http_address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.expect("Failed to get response body");
    assert!(body.contains("http_requests_total"), "Unexpected metrics: {}", body);
}

#[tokio::test]
async fn openapi_document_uses_configured_title() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/openapi.json", app.http_address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["info"]["title"], "AI Service Test");
    assert!(body["paths"]["/api/ai/summarize"]["post"].is_object());
    assert!(body["paths"]["/api/ai/spellcheck"]["post"].is_object());
}

#[tokio::test]
async fn openapi_document_can_be_disabled() {
    let app = TestApp::spawn_with(test_config(false)).await;

    let response = app
        .client
        .get(format!("{}/openapi.json", app.http_address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/ai/translate", app.http_address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().unwrap().contains("/api/ai/translate"));
}

#[tokio::test]
async fn unknown_paths_share_one_metrics_series() {
    service_core::observability::init_metrics();
    let app = TestApp::spawn().await;

    for i in 0..20 {
        app.client
            .get(format!("{}/scan/{}", app.http_address, i))
            .send()
            .await
            .expect("Failed to execute request");
    }

    let body = app
        .client
        .get(format!("{}/metrics", app.http_address))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to get response body");

    assert!(!body.contains("/scan/"), "Unexpected metrics: {}", body);

    let unmatched_series = body
        .lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .filter(|line| line.contains("path=\"unmatched\""))
        .count();
    assert_eq!(unmatched_series, 1, "Unexpected metrics: {}", body);
}

//! Prometheus registry shared by the HTTP metrics middleware and the
//! `/metrics` endpoint.

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
}

static METRICS: OnceLock<HttpMetrics> = OnceLock::new();

fn build() -> Result<HttpMetrics, prometheus::Error> {
    let registry = Registry::new();

    let requests_total = IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests"),
        &["method", "path", "status"],
    )?;

    let request_duration_seconds = HistogramVec::new(
        HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
        &["method", "path", "status"],
    )?;

    registry.register(Box::new(requests_total.clone()))?;
    registry.register(Box::new(request_duration_seconds.clone()))?;

    Ok(HttpMetrics {
        registry,
        requests_total,
        request_duration_seconds,
    })
}

fn metrics() -> Option<&'static HttpMetrics> {
    if let Some(m) = METRICS.get() {
        return Some(m);
    }

    match build() {
        Ok(m) => Some(METRICS.get_or_init(|| m)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize metrics");
            None
        }
    }
}

/// Register the HTTP collectors. Safe to call more than once.
pub fn init_metrics() {
    if metrics().is_some() {
        tracing::info!("Prometheus metrics initialized");
    }
}

/// Record a completed HTTP request.
pub fn record_http_request(method: &str, path: &str, status: &str, duration_secs: f64) {
    if let Some(m) = metrics() {
        m.requests_total
            .with_label_values(&[method, path, status])
            .inc();
        m.request_duration_seconds
            .with_label_values(&[method, path, status])
            .observe(duration_secs);
    }
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let Some(m) = metrics() else {
        return "# Metrics registry not initialized\n".to_string();
    };

    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    if let Err(e) = encoder.encode(&m.registry.gather(), &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Port the grammar checker has always been reachable on.
pub const DEFAULT_PORT: u16 = 5000;

const DEFAULT_SERVICE_NAME: &str = "grammar-service";

#[derive(Debug, Clone)]
pub struct GrammarConfig {
    pub common: core_config::Config,
    /// Name reported by `/health` and attached to traces.
    pub service_name: String,
}

impl GrammarConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load(DEFAULT_PORT)?;

        Ok(GrammarConfig {
            common: common_config,
            service_name: env_or("GRAMMAR_SERVICE_NAME", DEFAULT_SERVICE_NAME),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

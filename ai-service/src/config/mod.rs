use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// uvicorn's default port, kept for existing deployments.
pub const DEFAULT_PORT: u16 = 8000;

const DEFAULT_TITLE: &str = "UTH-ConfMS AI Service";

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub common: core_config::Config,
    pub docs: DocsConfig,
}

#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Serve the OpenAPI document at `/openapi.json`.
    pub enabled: bool,
    /// Title advertised in the OpenAPI document.
    pub title: String,
}

impl AiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load(DEFAULT_PORT)?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AiConfig {
            common: common_config,
            docs: DocsConfig {
                // Required in prod.
                enabled: parse_bool(&get_env("AI_DOCS_ENABLED", Some("true"), is_prod)?)?,
                title: get_env("AI_SERVICE_TITLE", Some(DEFAULT_TITLE), false)?,
            },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::ConfigError(anyhow::anyhow!(
            "expected a boolean, got '{}'",
            other
        ))),
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

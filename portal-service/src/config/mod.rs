use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub common: core_config::Config,
    pub environment: String,
    pub store: StoreConfig,
    pub llm: LlmConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

/// Routing credential for the upstream language model. Absence of the key
/// selects the "not configured" streaming behavior; presence selects the
/// placeholder stream until a real provider is wired in.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl PortalConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env and APP__ prefix)
        let common_config = core_config::Config::load()?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let is_prod = environment == "prod";

        let config = PortalConfig {
            common: common_config,
            environment,
            store: StoreConfig {
                backend: get_env("STORE_BACKEND", Some("mongo"), is_prod)?
                    .parse()
                    .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
                uri: get_env("MONGODB_URI", None, is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("portal_db"), is_prod)?,
            },
            llm: LlmConfig {
                api_key: env::var("LLM_API_KEY").ok().filter(|key| !key.is_empty()),
            },
            cors: CorsConfig {
                allowed_origins: get_env("ALLOWED_ORIGINS", Some("*"), is_prod)?
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that are unsafe to run in production.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.environment == "prod"
            && self.cors.allowed_origins.iter().any(|origin| origin == "*")
        {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "ALLOWED_ORIGINS must not contain '*' in production"
            )));
        }
        Ok(())
    }
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required in production but not set",
                    key
                ))))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(format!(
                    "{} is required but not set",
                    key
                ))))
            }
        }
    }
}

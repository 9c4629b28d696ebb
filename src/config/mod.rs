use crate::core::{AppError, Result};
use std::env;
use std::path::PathBuf;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Leading segment of every invoice number
    pub invoice_prefix: String,
    /// YAML rate catalog; the built-in catalog is used when unset
    pub rate_catalog_path: Option<PathBuf>,
}

impl AppConfig {
    fn from_env() -> Result<Self> {
        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "pretty" | "text" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT '{}': expected pretty or json",
                    other
                )))
            }
        };

        Ok(Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_format,
            invoice_prefix: env::var("INVOICE_PREFIX").unwrap_or_else(|_| "INV".to_string()),
            rate_catalog_path: env::var("RATE_CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig::from_env()?,
            server: ServerConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.app.invoice_prefix;
        if prefix.trim().is_empty() {
            return Err(AppError::Configuration(
                "INVOICE_PREFIX cannot be empty".to_string(),
            ));
        }

        if prefix.contains('/') {
            return Err(AppError::Configuration(format!(
                "INVOICE_PREFIX '{}' cannot contain '/'",
                prefix
            )));
        }

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "SERVER_WORKERS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

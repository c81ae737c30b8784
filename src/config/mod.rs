use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Upper bound on the number of calendar days a sales report may span
    pub max_report_days: u32,
}

impl AppConfig {
    /// Tracing filter directives used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> String {
        format!("warungpos={},actix_web=info", self.log_level)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                max_report_days: env::var("MAX_REPORT_DAYS")
                    .unwrap_or_else(|_| "366".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid MAX_REPORT_DAYS".to_string())
                    })?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.max_report_days == 0 {
            return Err(AppError::Configuration(
                "Max report days must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

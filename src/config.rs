use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub spec_path: PathBuf,
    pub fixture_dir: PathBuf,
    pub service_port: u16,
    pub service_host: String,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let spec_path = env::var("MOCKAPI_SPEC_PATH")
            .context("MOCKAPI_SPEC_PATH environment variable is required")?
            .into();

        let fixture_dir = env::var("MOCKAPI_FIXTURE_DIR")
            .unwrap_or_else(|_| "mock-data".to_string())
            .into();

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3002".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let environment = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            spec_path,
            fixture_dir,
            service_port,
            service_host,
            environment,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  OpenAPI document: {}", self.spec_path.display());
        tracing::info!("  Fixture directory: {}", self.fixture_dir.display());
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

use std::env;
use std::str::FromStr;

use dotenvy::dotenv;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const API_BASE_URL_ENV: &str = "CALC_API_BASE_URL";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct Config {
    // Root every operation path is appended to
    api_base_url: Url,

    // Logging Level
    log_level: tracing::Level,
}

impl Config {
    /// Reads the process environment, after loading `.env` if present
    pub fn from_env() -> Result<Config, ConfigError> {
        if dotenv().is_err() {
            tracing::warn!("No .env file found");
        }

        Self::resolve(env::var(API_BASE_URL_ENV).ok(), env::var(LOG_LEVEL_ENV).ok())
    }

    /// Builds a config from raw variable values. Unset and empty values both
    /// fall back to the defaults.
    pub fn resolve(
        api_base_url: Option<String>,
        log_level: Option<String>,
    ) -> Result<Config, ConfigError> {
        let api_base_url = match api_base_url.filter(|s| !s.is_empty()) {
            Some(url) => url,
            None => DEFAULT_API_BASE_URL.to_string(),
        };
        let api_base_url = Url::parse(&api_base_url)?;
        if !matches!(api_base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(
                api_base_url.scheme().to_string(),
            ));
        }

        let log_level_str = match log_level.filter(|s| !s.is_empty()) {
            Some(level) => level,
            None => {
                tracing::warn!("No LOG_LEVEL found in .env. Using default");
                "info".to_string()
            }
        };
        let log_level = match tracing::Level::from_str(&log_level_str) {
            Ok(level) => level,
            Err(_e) => {
                tracing::warn!("Invalid LOG_LEVEL found in .env. Using default");
                tracing::Level::INFO
            }
        };

        Ok(Config {
            api_base_url,
            log_level,
        })
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn log_level(&self) -> &tracing::Level {
        &self.log_level
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid api base url: {0}")]
    Url(#[from] url::ParseError),
    #[error("unsupported api base url scheme: {0}")]
    UnsupportedScheme(String),
}

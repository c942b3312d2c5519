//! Configuration loaded from environment variables (and `.env` when present).

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("Invalid environment value: {0}")]
    InvalidValue(String),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bind address (BOOKSWAP_HOST)
    pub host: String,

    /// Server port (PORT)
    pub port: u16,

    /// Simulated latency of the add-book submission (BOOKSWAP_SUBMIT_DELAY_MS)
    pub submit_delay: Duration,

    /// Start with the demonstration data (BOOKSWAP_SEED_DEMO_DATA)
    pub seed_demo_data: bool,

    /// Log filter (RUST_LOG)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            submit_delay: Duration::from_millis(1000),
            seed_demo_data: true,
            log_level: "bookswap=debug,tower_http=debug".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unset keys take defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let host = lookup("BOOKSWAP_HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|_| {
                ConfigError::InvalidPort(format!("PORT must be a valid number, got '{}'", port))
            })?,
            None => defaults.port,
        };

        let submit_delay = match lookup("BOOKSWAP_SUBMIT_DELAY_MS") {
            Some(ms) => ms.trim().parse::<u64>().map(Duration::from_millis).map_err(|_| {
                ConfigError::InvalidValue(format!(
                    "BOOKSWAP_SUBMIT_DELAY_MS must be milliseconds, got '{}'",
                    ms
                ))
            })?,
            None => defaults.submit_delay,
        };

        let seed_demo_data = match lookup("BOOKSWAP_SEED_DEMO_DATA") {
            Some(flag) => parse_flag(&flag).ok_or_else(|| {
                ConfigError::InvalidValue(format!(
                    "BOOKSWAP_SEED_DEMO_DATA must be true or false, got '{}'",
                    flag
                ))
            })?,
            None => defaults.seed_demo_data,
        };

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        Ok(Config {
            host,
            port,
            submit_delay,
            seed_demo_data,
            log_level,
        })
    }

    /// "host:port" for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

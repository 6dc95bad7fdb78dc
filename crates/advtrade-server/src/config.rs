//! Application configuration.
//!
//! Loaded from a TOML file with environment-variable overrides for the
//! exchange secrets, so keys never need to live on disk next to the
//! service config.

use std::path::Path;
use std::time::Duration;

use advtrade_exchange::{ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Exchange client configuration. Credentials are optional here; the
/// environment overrides below are the usual source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Use the exchange sandbox environment.
    #[serde(default)]
    pub sandbox: bool,
    /// Remote-call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// API key name.
    #[serde(default)]
    pub api_key: Option<String>,
    /// EC private key PEM.
    #[serde(default)]
    pub private_key: Option<String>,
    /// Legacy secret field accepted in place of `private_key`.
    #[serde(default)]
    pub api_secret: Option<String>,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub exchange: ExchangeConfig,
    /// Advisory request-rate ceiling for operators; not enforced by the
    /// core (a fronting proxy owns enforcement).
    #[serde(default = "default_max_requests_per_minute")]
    pub max_requests_per_minute: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_requests_per_minute() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            exchange: ExchangeConfig::default(),
            max_requests_per_minute: default_max_requests_per_minute(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration, then apply environment overrides.
    ///
    /// Path resolution: explicit argument, then `ADVTRADE_CONFIG`, then
    /// `config/default.toml`. A missing file is not an error; defaults
    /// apply so the server can start unconfigured.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let config_path = path
            .map(|p| p.to_string())
            .or_else(|| std::env::var("ADVTRADE_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Environment variables win over file contents for secrets and the
    /// sandbox switch.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("COINBASE_API_KEY") {
            self.exchange.api_key = Some(key);
        }
        if let Ok(key) = std::env::var("COINBASE_PRIVATE_KEY") {
            self.exchange.private_key = Some(key);
        }
        if let Ok(secret) = std::env::var("COINBASE_API_SECRET") {
            self.exchange.api_secret = Some(secret);
        }
        if let Ok(sandbox) = std::env::var("COINBASE_SANDBOX") {
            self.exchange.sandbox = matches!(sandbox.as_str(), "1" | "true" | "TRUE" | "True");
        }
    }

    /// Credentials when both halves are present. `private_key` wins over
    /// the legacy `api_secret` field.
    pub fn credentials(&self) -> Option<Credentials> {
        let api_key = self.exchange.api_key.clone()?;
        let private_key = self
            .exchange
            .private_key
            .clone()
            .or_else(|| self.exchange.api_secret.clone())?;
        Some(Credentials {
            api_key,
            private_key,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            sandbox: self.exchange.sandbox,
            timeout: Duration::from_secs(self.exchange.timeout_secs),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

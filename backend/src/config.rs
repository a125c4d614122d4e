//! Server configuration.
//!
//! Defaults, optionally replaced by a YAML file named in `LEDGER_CONFIG`,
//! then overridden field by field from `LEDGER_*` environment variables.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

pub const CONFIG_PATH_VAR: &str = "LEDGER_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to
    pub bind_address: String,
    /// Origin allowed by the CORS layer
    pub allowed_origin: String,
    pub redis: RedisConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// When false the remote backend is never connected and remote requests
    /// are served from memory
    pub enabled: bool,
    pub url: String,
    pub connect_timeout_ms: u64,
    pub io_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            allowed_origin: "http://localhost:3000".to_string(),
            redis: RedisConfig::default(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "redis://127.0.0.1:6379".to_string(),
            connect_timeout_ms: 2_000,
            io_timeout_ms: 2_000,
        }
    }
}

impl ServerConfig {
    /// Load from the file named in `LEDGER_CONFIG` (if any) and the process
    /// environment
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from {}", path.display());
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Apply `LEDGER_*` overrides read through `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("LEDGER_BIND_ADDRESS") {
            self.bind_address = value;
        }
        if let Some(value) = lookup("LEDGER_ALLOWED_ORIGIN") {
            self.allowed_origin = value;
        }
        if let Some(value) = lookup("LEDGER_REDIS_URL") {
            self.redis.url = value;
        }
        if let Some(value) = lookup("LEDGER_REDIS_ENABLED") {
            self.redis.enabled = value
                .trim()
                .parse()
                .with_context(|| format!("LEDGER_REDIS_ENABLED must be true or false, got `{value}`"))?;
        }
        Ok(())
    }
}

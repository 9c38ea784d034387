//! Client configuration.
//!
//! Reads `~/.hotel-admin/config.toml`. The server URL can be overridden
//! per invocation by a flag or the `HOTEL_ADMIN_SERVER` variable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL used when nothing else is configured.
pub const DEFAULT_SERVER: &str = "https://back-testtechnical-main-y71e7j.laravel.cloud/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Client configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server base URL (e.g. "https://api.example.com/api").
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub server: String,
}

impl ClientConfig {
    /// Default config file path: ~/.hotel-admin/config.toml.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".hotel-admin").join("config.toml")
    }

    /// Load config from disk, or return default if the file is absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Resolve the server base URL: flag, then environment, then config
/// file, then the built-in default.
pub fn resolve_server(flag: Option<&str>, env: Option<String>, config: &ClientConfig) -> String {
    if let Some(server) = flag {
        return server.to_string();
    }
    if let Some(server) = env {
        if !server.is_empty() {
            return server;
        }
    }
    if !config.server.is_empty() {
        return config.server.clone();
    }
    DEFAULT_SERVER.to_string()
}

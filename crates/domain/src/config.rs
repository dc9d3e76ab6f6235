//! Configuration structures
//!
//! Loaded by `goldledger-infra::config` from the environment or a file.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;

/// Top-level console configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the ledger backend lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend origin, e.g. `https://ledger.example.com`. The `/api` prefix
    /// is appended by the client.
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

crate::impl_domain_status_conversions!(LogFormat {
    Text => "text",
    Json => "json",
});

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Default filter directive used when `RUST_LOG` is unset
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS }
    }
}

impl Config {
    /// Configuration pointing at `base_url` with default timeouts and logging.
    pub fn for_backend(base_url: impl Into<String>) -> Self {
        Self { backend: BackendConfig::new(base_url), logging: LoggingConfig::default() }
    }
}

//! Configuration loader
//!
//! Loads console configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the backend URL is not set there, falls back to a file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `GOLDLEDGER_BACKEND_URL`: Backend origin (`BACKEND_URL` is accepted too)
//! - `GOLDLEDGER_TIMEOUT_SECS`: Request timeout in seconds (default 30)
//! - `GOLDLEDGER_LOG_FORMAT`: `text` or `json` (default text)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./goldledger.{toml,json}` then `./config.{toml,json}`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};

use goldledger_domain::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, ENV_BACKEND_URL, ENV_BACKEND_URL_FALLBACK, ENV_LOG_FORMAT,
    ENV_TIMEOUT_SECS,
};
use goldledger_domain::{BackendConfig, Config, LedgerError, LogFormat, LoggingConfig, Result};
use url::Url;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["goldledger.toml", "goldledger.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the backend URL is
/// missing there, falls back to loading from a config file.
///
/// # Errors
/// Returns `LedgerError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The backend URL is not an absolute http(s) URL
pub fn load() -> Result<Config> {
    if optional_env(ENV_BACKEND_URL).or_else(|| optional_env(ENV_BACKEND_URL_FALLBACK)).is_none() {
        tracing::debug!("Backend URL not set in environment, trying file");
        return load_from_file(None);
    }

    // An invalid environment is reported as-is rather than masked by a file.
    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `LedgerError::Config` if the backend URL is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var(ENV_BACKEND_URL).or_else(|_| env_var(ENV_BACKEND_URL_FALLBACK))?;

    let timeout_secs = match optional_env(ENV_TIMEOUT_SECS) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| LedgerError::Config(format!("Invalid request timeout: {}", e)))?,
        None => DEFAULT_REQUEST_TIMEOUT_SECS,
    };

    let format = match optional_env(ENV_LOG_FORMAT) {
        Some(raw) => raw.parse::<LogFormat>().map_err(LedgerError::Config)?,
        None => LogFormat::default(),
    };

    let config = Config {
        backend: BackendConfig { base_url, timeout_secs },
        logging: LoggingConfig { format, filter: None },
    };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `LedgerError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LedgerError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LedgerError::Config(format!(
                "{} is not set and no config file was found in any of the standard locations",
                ENV_BACKEND_URL
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LedgerError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Check values serde cannot: the backend URL must be an absolute http(s)
/// URL and the timeout must be positive.
///
/// # Errors
/// Returns `LedgerError::Config` describing the first invalid value.
pub fn validate(config: &Config) -> Result<()> {
    parse_base_url(&config.backend.base_url)?;
    if config.backend.timeout_secs == 0 {
        return Err(LedgerError::Config("Request timeout must be at least 1 second".into()));
    }
    Ok(())
}

/// Parse a backend origin. A trailing slash is tolerated.
///
/// # Errors
/// Returns `LedgerError::Config` if the value is not an absolute http(s)
/// URL.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| LedgerError::Config(format!("Invalid backend URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(LedgerError::Config(format!(
            "Backend URL must be an absolute http(s) URL: {}",
            raw
        )));
    }
    Ok(url)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `LedgerError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LedgerError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LedgerError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(LedgerError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the working directory, its parent and grandparent, then the
/// same three levels relative to the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `LedgerError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    optional_env(key).ok_or_else(|| {
        LedgerError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

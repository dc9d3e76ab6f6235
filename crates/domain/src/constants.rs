//! Application constants
//!
//! Centralized location for domain-level constants used throughout the
//! console.

// Backend API
pub const API_PREFIX: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Environment variables
pub const ENV_BACKEND_URL: &str = "GOLDLEDGER_BACKEND_URL";
pub const ENV_BACKEND_URL_FALLBACK: &str = "BACKEND_URL";
pub const ENV_TIMEOUT_SECS: &str = "GOLDLEDGER_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "GOLDLEDGER_LOG_FORMAT";

// Display units
pub const GOLD_UNIT: &str = "g";
pub const CURRENCY_SYMBOL: &str = "₹";
pub const EMPTY_CELL: &str = "-";

//! # Goldledger Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed ledger backend client
//! - Configuration loading (environment and file)
//! - Conversions from external errors into `LedgerError`
//!
//! ## Architecture
//! - Implements traits defined in `goldledger-core`
//! - Contains all I/O except the terminal

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::LedgerApiClient;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};

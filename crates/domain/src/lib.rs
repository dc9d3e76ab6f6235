//! # Goldledger Domain
//!
//! Business domain types for the goldsmith ledger console.
//!
//! This crate contains:
//! - Backend record types (customers, transactions, jobs, balances)
//! - Create payloads sent to the backend
//! - Domain error type and Result definition
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other goldledger crates
//! - Pure data structures and formatting helpers

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;

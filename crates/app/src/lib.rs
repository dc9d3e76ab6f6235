//! # Goldledger App
//!
//! Terminal application layer - line commands and main entry point.
//!
//! This crate contains:
//! - Line commands (terminal → console bridge)
//! - Application context (dependency injection)
//! - Adapters for the user-facing ports
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod adapters;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::{handle_line, Command, Reply};
pub use context::*;

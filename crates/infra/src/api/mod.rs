//! Ledger backend REST client
//!
//! Implements the core [`LedgerApi`](goldledger_core::LedgerApi) port over
//! HTTP/JSON.

pub mod client;

pub use client::LedgerApiClient;

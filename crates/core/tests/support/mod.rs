//! Shared test helpers for `goldledger-core` integration tests.
//!
//! An in-memory backend that records every request it receives and a
//! notifier that records every notice, so console tests can assert on the
//! exact requests issued and messages shown.

#![allow(dead_code)]

pub mod ledger;
pub mod notifier;

use std::sync::Arc;

use goldledger_core::LedgerConsole;

pub use ledger::{Call, Endpoint, InMemoryLedger};
pub use notifier::RecordingNotifier;

/// Console wired to fresh mocks.
pub fn console_with(ledger: &Arc<InMemoryLedger>) -> (LedgerConsole, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let console = LedgerConsole::new(ledger.clone(), notifier.clone());
    (console, notifier)
}

//! Adapters for the user-facing core ports.

pub mod notifier;

pub use notifier::TerminalNotifier;

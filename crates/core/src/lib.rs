//! # Goldledger Core
//!
//! Console logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces to the backend and to the user (traits)
//! - View state cells and the creation forms
//! - The ledger console that orchestrates fetches and writes
//! - Text rendering of the view state
//!
//! ## Architecture Principles
//! - Only depends on `goldledger-domain`
//! - No HTTP or terminal code
//! - All external effects via traits

pub mod console;
pub mod forms;
pub mod navigation;
pub mod ports;
pub mod render;
pub mod state;

pub use console::{LedgerConsole, SubmitOutcome};
pub use forms::{CustomerDraft, DraftForm, FormState, JobDraft, RecordKind, TransactionDraft};
pub use navigation::Tab;
pub use ports::{LedgerApi, Notice, NoticeLevel, Notifier};
pub use render::render_screen;
pub use state::{CustomerDetail, StateCell, ViewState};

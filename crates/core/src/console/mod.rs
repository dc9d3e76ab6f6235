//! Ledger console - view state orchestration
//!
//! [`LedgerConsole`] owns the [`ViewState`] and is the only writer of it. Its
//! operations are split by concern:
//! - `fetch`: the four list/summary reads (stale-but-available on failure)
//! - `detail`: customer drill-down
//! - `submit`: the three creation forms
//! - `actions`: job status changes, deletes, filter and backend check

mod actions;
mod detail;
mod fetch;
mod submit;

use std::sync::Arc;

use goldledger_domain::{LedgerError, Result};
use tracing::debug;

pub use submit::SubmitOutcome;

use crate::forms::{DraftForm, RecordKind};
use crate::navigation::Tab;
use crate::ports::{LedgerApi, Notifier};
use crate::state::ViewState;

/// The ledger console: backend port, notifier and the state they feed.
pub struct LedgerConsole {
    api: Arc<dyn LedgerApi>,
    notifier: Arc<dyn Notifier>,
    state: ViewState,
}

impl LedgerConsole {
    pub fn new(api: Arc<dyn LedgerApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier, state: ViewState::default() }
    }

    /// Read access for renderers.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Switch the visible section. Never touches the network.
    pub fn switch_tab(&self, tab: Tab) {
        let previous = self.state.active_tab.replace(tab);
        debug!(from = %previous, to = %tab, "tab switched");
    }

    pub fn active_tab(&self) -> Tab {
        self.state.active_tab.get()
    }

    /// Controlled-input edit of one field of a creation form.
    pub fn edit_field(&self, form: RecordKind, field: &str, value: &str) -> Result<()> {
        match form {
            RecordKind::Customer => {
                self.state.customer_form.update(|state| state.draft.set_field(field, value))
            }
            RecordKind::Transaction => {
                self.state.transaction_form.update(|state| state.draft.set_field(field, value))
            }
            RecordKind::Job => {
                self.state.job_form.update(|state| state.draft.set_field(field, value))
            }
        }
    }

    /// Jump from the customer detail view to the transaction form with the
    /// customer pre-selected.
    pub fn start_transaction_for_selected(&self) -> Result<()> {
        let customer_id = self.selected_customer_id()?;
        self.state.transaction_form.update(|state| state.draft.customer_id = customer_id);
        self.switch_tab(Tab::Transactions);
        Ok(())
    }

    /// Jump from the customer detail view to the job form with the customer
    /// pre-selected.
    pub fn start_job_for_selected(&self) -> Result<()> {
        let customer_id = self.selected_customer_id()?;
        self.state.job_form.update(|state| state.draft.customer_id = customer_id);
        self.switch_tab(Tab::Jobs);
        Ok(())
    }

    fn selected_customer_id(&self) -> Result<String> {
        self.state
            .detail
            .selected_id()
            .ok_or_else(|| LedgerError::InvalidInput("no customer is open".into()))
    }
}

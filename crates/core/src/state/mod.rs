//! View state
//!
//! Each piece of screen state lives in its own [`StateCell`]. A cell is a
//! last-write-wins snapshot: fetches replace the whole value, nothing is ever
//! merged into a cached list. Cells are mutated only by the
//! [`LedgerConsole`](crate::LedgerConsole) operation that owns them; renderers
//! read them.

mod cell;

use goldledger_domain::{Customer, CustomerBalance, DashboardStats, Job, JobStatus, Transaction};

pub use cell::StateCell;

use crate::forms::{CustomerDraft, FormState, JobDraft, TransactionDraft};
use crate::navigation::Tab;

/// Everything the console renders.
#[derive(Debug, Default)]
pub struct ViewState {
    pub active_tab: StateCell<Tab>,
    /// Absent until the first successful dashboard fetch.
    pub dashboard: StateCell<Option<DashboardStats>>,
    pub customers: StateCell<Vec<Customer>>,
    /// Global ledger, newest first as delivered by the backend.
    pub transactions: StateCell<Vec<Transaction>>,
    pub jobs: StateCell<Vec<Job>>,
    /// Status filter applied to the job list fetch.
    pub job_filter: StateCell<Option<JobStatus>>,
    pub detail: CustomerDetail,
    pub customer_form: StateCell<FormState<CustomerDraft>>,
    pub transaction_form: StateCell<FormState<TransactionDraft>>,
    pub job_form: StateCell<FormState<JobDraft>>,
}

/// Drill-down into a single customer on the Customers tab.
///
/// `history` and `balance` stay `None` while their fetch is pending so the
/// view can tell "loading" from "empty".
#[derive(Debug, Default)]
pub struct CustomerDetail {
    pub selected: StateCell<Option<Customer>>,
    pub history: StateCell<Option<Vec<Transaction>>>,
    pub balance: StateCell<Option<CustomerBalance>>,
}

impl CustomerDetail {
    /// Id of the customer currently being viewed.
    pub fn selected_id(&self) -> Option<String> {
        self.selected.with(|selected| selected.as_ref().map(|customer| customer.id.clone()))
    }

    pub fn is_selected(&self, customer_id: &str) -> bool {
        self.selected.with(|selected| {
            selected.as_ref().is_some_and(|customer| customer.id == customer_id)
        })
    }

    /// Drop the selection and both derived values.
    pub fn clear(&self) {
        self.selected.reset();
        self.history.reset();
        self.balance.reset();
    }
}

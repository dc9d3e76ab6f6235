use goldledger_domain::Result;
use tracing::{debug, error};

use super::LedgerConsole;
use crate::state::StateCell;

/// Replace `cell` with a successful result; log and keep the old value
/// otherwise. Returns whether the cell was replaced.
fn store<T>(cell: &StateCell<T>, resource: &'static str, result: Result<T>) -> bool {
    match result {
        Ok(value) => {
            cell.replace(value);
            debug!(resource, "snapshot replaced");
            true
        }
        Err(err) => {
            error!(
                resource,
                error = %err,
                kind = err.label(),
                "fetch failed, keeping previous snapshot"
            );
            false
        }
    }
}

impl LedgerConsole {
    /// Startup load: all four reads concurrently, each storing its own result
    /// as soon as it resolves.
    pub async fn load_all(&self) {
        tokio::join!(
            self.fetch_dashboard(),
            self.fetch_customers(),
            self.fetch_transactions(),
            self.fetch_jobs(),
        );
    }

    pub async fn fetch_dashboard(&self) -> bool {
        let result = self.api.dashboard().await.map(Some);
        store(&self.state.dashboard, "dashboard", result)
    }

    pub async fn fetch_customers(&self) -> bool {
        let result = self.api.list_customers().await;
        store(&self.state.customers, "customers", result)
    }

    /// Global ledger. Per-customer history goes through the detail loader.
    pub async fn fetch_transactions(&self) -> bool {
        let result = self.api.list_transactions(None).await;
        store(&self.state.transactions, "transactions", result)
    }

    /// Job list, honouring the current status filter.
    pub async fn fetch_jobs(&self) -> bool {
        let filter = self.state.job_filter.get();
        let result = self.api.list_jobs(filter).await;
        store(&self.state.jobs, "jobs", result)
    }
}

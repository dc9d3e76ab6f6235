use goldledger_domain::Customer;
use tracing::{debug, error, info};

use super::LedgerConsole;

impl LedgerConsole {
    /// Drill into one customer.
    ///
    /// Issues the filtered history and the balance request concurrently.
    /// Each result is stored as it arrives, but only while `customer` is
    /// still the one on screen.
    pub async fn open_customer(&self, customer: Customer) {
        let customer_id = customer.id.clone();
        info!(customer_id = %customer_id, "opening customer detail");

        self.state.detail.selected.replace(Some(customer));
        self.state.detail.history.reset();
        self.state.detail.balance.reset();

        self.load_customer_detail(&customer_id).await;
    }

    /// Leave the detail view. Clears both derived values whether or not
    /// their requests have finished.
    pub fn close_customer(&self) {
        if let Some(customer_id) = self.state.detail.selected_id() {
            debug!(customer_id = %customer_id, "closing customer detail");
        }
        self.state.detail.clear();
    }

    pub(super) async fn load_customer_detail(&self, customer_id: &str) {
        let history = async {
            match self.api.list_transactions(Some(customer_id)).await {
                Ok(rows) if self.state.detail.is_selected(customer_id) => {
                    self.state.detail.history.replace(Some(rows));
                }
                Ok(_) => debug!(customer_id, "discarding history for a customer no longer open"),
                Err(err) => error!(customer_id, error = %err, "failed to fetch customer history"),
            }
        };

        let balance = async {
            match self.api.customer_balance(customer_id).await {
                Ok(balance) if self.state.detail.is_selected(customer_id) => {
                    self.state.detail.balance.replace(Some(balance));
                }
                Ok(_) => debug!(customer_id, "discarding balance for a customer no longer open"),
                Err(err) => error!(customer_id, error = %err, "failed to fetch customer balance"),
            }
        };

        tokio::join!(history, balance);
    }

    /// Re-run the detail fetches for whoever is open, if anyone.
    pub(super) async fn reload_open_customer(&self) {
        if let Some(customer_id) = self.state.detail.selected_id() {
            self.load_customer_detail(&customer_id).await;
        }
    }
}

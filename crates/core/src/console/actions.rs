use goldledger_domain::{ApiMessage, JobStatus, Result};
use tracing::{error, info};

use super::LedgerConsole;
use crate::forms::RecordKind;
use crate::ports::Notice;

impl LedgerConsole {
    /// Move a job to `status`.
    ///
    /// Any status may follow any other. On success jobs and the dashboard are
    /// re-fetched; on failure the error is only logged and the list keeps
    /// whatever the last fetch returned.
    pub async fn update_job_status(&self, job_id: &str, status: JobStatus) -> bool {
        match self.api.update_job_status(job_id, status).await {
            Ok(job) => {
                info!(job_id, status = %job.status, "job status updated");
                tokio::join!(self.fetch_jobs(), self.fetch_dashboard());
                true
            }
            Err(err) => {
                error!(job_id, status = %status, error = %err, "failed to update job status");
                false
            }
        }
    }

    /// Restrict the job list to one status (or lift the restriction) and
    /// re-fetch it.
    pub async fn set_job_filter(&self, filter: Option<JobStatus>) -> bool {
        self.state.job_filter.replace(filter);
        self.fetch_jobs().await
    }

    pub async fn delete_customer(&self, customer_id: &str) -> bool {
        let result = self.api.delete_customer(customer_id).await;
        if result.is_ok() && self.state.detail.is_selected(customer_id) {
            self.close_customer();
        }
        self.finish_delete(RecordKind::Customer, customer_id, result).await
    }

    pub async fn delete_transaction(&self, transaction_id: &str) -> bool {
        let result = self.api.delete_transaction(transaction_id).await;
        let deleted = self.finish_delete(RecordKind::Transaction, transaction_id, result).await;
        if deleted {
            self.reload_open_customer().await;
        }
        deleted
    }

    pub async fn delete_job(&self, job_id: &str) -> bool {
        let result = self.api.delete_job(job_id).await;
        self.finish_delete(RecordKind::Job, job_id, result).await
    }

    async fn finish_delete(&self, kind: RecordKind, id: &str, result: Result<ApiMessage>) -> bool {
        match result {
            Ok(ack) => {
                info!(record = kind.noun(), id, "record deleted");
                self.refresh_after_write(kind).await;
                self.notifier.notify(Notice::success(ack.message));
                true
            }
            Err(err) => {
                error!(record = kind.noun(), id, error = %err, "delete request failed");
                self.notifier.notify(Notice::failure(format!(
                    "Error deleting {}: {}",
                    kind.noun(),
                    err.user_message()
                )));
                false
            }
        }
    }

    /// Ask the backend root for its banner and report it to the user.
    pub async fn check_backend(&self) -> bool {
        match self.api.ping().await {
            Ok(ack) => {
                self.notifier.notify(Notice::info(format!("Backend reachable: {}", ack.message)));
                true
            }
            Err(err) => {
                error!(error = %err, "backend check failed");
                self.notifier.notify(Notice::failure(format!(
                    "Backend unreachable: {}",
                    err.user_message()
                )));
                false
            }
        }
    }
}

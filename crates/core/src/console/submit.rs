use std::future::Future;
use std::sync::Arc;

use goldledger_domain::{LedgerError, Result};
use tracing::{error, info, warn};

use super::LedgerConsole;
use crate::forms::{DraftForm, FormState, RecordKind};
use crate::ports::Notice;
use crate::state::StateCell;

/// What happened to a form submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Backend accepted the record; the draft was reset.
    Created,
    /// Required inputs are blank; nothing was sent.
    Incomplete(Vec<&'static str>),
    /// A previous submission of the same form is still in flight.
    Busy,
    /// Backend rejected the request or was unreachable; the draft is kept.
    Failed(LedgerError),
}

impl LedgerConsole {
    pub async fn submit_customer(&self) -> SubmitOutcome {
        let api = Arc::clone(&self.api);
        self.run_submission(&self.state.customer_form, move |payload| async move {
            api.create_customer(&payload).await.map(|created| created.id)
        })
        .await
    }

    pub async fn submit_transaction(&self) -> SubmitOutcome {
        let api = Arc::clone(&self.api);
        self.run_submission(&self.state.transaction_form, move |payload| async move {
            api.create_transaction(&payload).await.map(|created| created.id)
        })
        .await
    }

    pub async fn submit_job(&self) -> SubmitOutcome {
        let api = Arc::clone(&self.api);
        self.run_submission(&self.state.job_form, move |payload| async move {
            api.create_job(&payload).await.map(|created| created.id)
        })
        .await
    }

    /// Submit the form belonging to `kind`.
    pub async fn submit(&self, kind: RecordKind) -> SubmitOutcome {
        match kind {
            RecordKind::Customer => self.submit_customer().await,
            RecordKind::Transaction => self.submit_transaction().await,
            RecordKind::Job => self.submit_job().await,
        }
    }

    /// Shared submission contract for every creation form.
    async fn run_submission<D, F, Fut>(
        &self,
        form: &StateCell<FormState<D>>,
        send: F,
    ) -> SubmitOutcome
    where
        D: DraftForm,
        F: FnOnce(D::Payload) -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let kind = D::KIND;
        let prepared = form.update(|state| {
            if state.busy {
                return Err(SubmitOutcome::Busy);
            }
            let missing = state.draft.missing_required();
            if !missing.is_empty() {
                return Err(SubmitOutcome::Incomplete(missing));
            }
            state.busy = true;
            Ok(state.draft.payload())
        });

        let payload = match prepared {
            Ok(payload) => payload,
            Err(outcome) => {
                warn!(form = kind.noun(), ?outcome, "submission not sent");
                return outcome;
            }
        };

        let outcome = match send(payload).await {
            Ok(created_id) => {
                info!(form = kind.noun(), id = %created_id, "record created");
                form.update(|state| state.draft.reset());
                self.refresh_after_write(kind).await;
                self.notifier.notify(Notice::success(kind.created_message()));
                SubmitOutcome::Created
            }
            Err(err) => {
                error!(form = kind.noun(), error = %err, "create request failed");
                self.notifier.notify(Notice::failure(kind.create_failed_message()));
                SubmitOutcome::Failed(err)
            }
        };

        form.update(|state| state.busy = false);
        outcome
    }

    /// Re-fetch the list owning `kind` together with the dashboard.
    pub(super) async fn refresh_after_write(&self, kind: RecordKind) {
        match kind {
            RecordKind::Customer => {
                tokio::join!(self.fetch_customers(), self.fetch_dashboard());
            }
            RecordKind::Transaction => {
                tokio::join!(self.fetch_transactions(), self.fetch_dashboard());
            }
            RecordKind::Job => {
                tokio::join!(self.fetch_jobs(), self.fetch_dashboard());
            }
        }
    }
}

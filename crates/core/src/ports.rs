//! Port interfaces for the ledger console
//!
//! These traits define the boundaries between the console logic and the
//! outside world: the backend HTTP API and whatever surface shows
//! acknowledgements to the user.

use async_trait::async_trait;
use goldledger_domain::{
    ApiMessage, Customer, CustomerBalance, DashboardStats, Job, JobStatus, NewCustomer, NewJob,
    NewTransaction, Result, Transaction,
};

/// Remote ledger backend.
///
/// Every method issues exactly one request. Implementations must not retry:
/// a failure is reported once and the console decides what to keep on
/// screen.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// `GET /api/dashboard`
    async fn dashboard(&self) -> Result<DashboardStats>;

    /// `GET /api/customers`
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// `POST /api/customers`
    async fn create_customer(&self, payload: &NewCustomer) -> Result<Customer>;

    /// `DELETE /api/customers/{id}`
    async fn delete_customer(&self, customer_id: &str) -> Result<ApiMessage>;

    /// `GET /api/transactions`, optionally filtered to one customer.
    async fn list_transactions(&self, customer_id: Option<&str>) -> Result<Vec<Transaction>>;

    /// `POST /api/transactions`
    async fn create_transaction(&self, payload: &NewTransaction) -> Result<Transaction>;

    /// `DELETE /api/transactions/{id}`
    async fn delete_transaction(&self, transaction_id: &str) -> Result<ApiMessage>;

    /// `GET /api/customer/{id}/balance`
    async fn customer_balance(&self, customer_id: &str) -> Result<CustomerBalance>;

    /// `GET /api/jobs`, optionally filtered by status.
    async fn list_jobs(&self, status: Option<JobStatus>) -> Result<Vec<Job>>;

    /// `POST /api/jobs`
    async fn create_job(&self, payload: &NewJob) -> Result<Job>;

    /// `PUT /api/jobs/{id}?status=...`
    async fn update_job_status(&self, job_id: &str, status: JobStatus) -> Result<Job>;

    /// `DELETE /api/jobs/{id}`
    async fn delete_job(&self, job_id: &str) -> Result<ApiMessage>;

    /// `GET /api/`
    async fn ping(&self) -> Result<ApiMessage>;
}

/// Severity of a user-facing acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Failure,
    Info,
}

/// A message the user has to see, the console's equivalent of an alert box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Failure, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }
}

/// Surface for acknowledgements of write operations.
///
/// Read failures never reach the notifier; they are only logged.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

//! In-memory `LedgerApi` mock
//!
//! Behaves like a small backend: records created through it show up in later
//! list calls and in the dashboard totals. Individual endpoints can be made to
//! fail, and writes or customer detail reads can be held until a test
//! releases them.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use goldledger_core::LedgerApi;
use goldledger_domain::{
    ApiMessage, Customer, CustomerBalance, DashboardStats, Job, JobStatus, LedgerError,
    NewCustomer, NewJob, NewTransaction, Result as DomainResult, Transaction,
};
use parking_lot::Mutex;
use tokio::sync::Notify;
use uuid::Uuid;

/// One request as the backend received it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Dashboard,
    ListCustomers,
    CreateCustomer(NewCustomer),
    DeleteCustomer(String),
    ListTransactions(Option<String>),
    CreateTransaction(NewTransaction),
    DeleteTransaction(String),
    CustomerBalance(String),
    ListJobs(Option<JobStatus>),
    CreateJob(NewJob),
    UpdateJobStatus(String, JobStatus),
    DeleteJob(String),
    Ping,
}

impl Call {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Dashboard => Endpoint::Dashboard,
            Self::ListCustomers => Endpoint::ListCustomers,
            Self::CreateCustomer(_) => Endpoint::CreateCustomer,
            Self::DeleteCustomer(_) => Endpoint::DeleteCustomer,
            Self::ListTransactions(_) => Endpoint::ListTransactions,
            Self::CreateTransaction(_) => Endpoint::CreateTransaction,
            Self::DeleteTransaction(_) => Endpoint::DeleteTransaction,
            Self::CustomerBalance(_) => Endpoint::CustomerBalance,
            Self::ListJobs(_) => Endpoint::ListJobs,
            Self::CreateJob(_) => Endpoint::CreateJob,
            Self::UpdateJobStatus(..) => Endpoint::UpdateJobStatus,
            Self::DeleteJob(_) => Endpoint::DeleteJob,
            Self::Ping => Endpoint::Ping,
        }
    }
}

/// Endpoint selector used to inject failures and count calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Dashboard,
    ListCustomers,
    CreateCustomer,
    DeleteCustomer,
    ListTransactions,
    CreateTransaction,
    DeleteTransaction,
    CustomerBalance,
    ListJobs,
    CreateJob,
    UpdateJobStatus,
    DeleteJob,
    Ping,
}

#[derive(Default)]
struct Records {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    jobs: Vec<Job>,
}

#[derive(Default)]
pub struct InMemoryLedger {
    records: Mutex<Records>,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashMap<Endpoint, LedgerError>>,
    write_gate: Mutex<Option<Arc<Notify>>>,
    detail_gate: Mutex<Option<Arc<Notify>>>,
}

impl InMemoryLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a customer directly, without recording a call.
    pub fn seed_customer(&self, name: &str) -> Customer {
        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: None,
            notes: None,
            created_at: Utc::now(),
        };
        self.records.lock().customers.push(customer.clone());
        customer
    }

    pub fn seed_transaction(&self, customer: &Customer, gold_in: f64, cash_in: f64) -> Transaction {
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            date: Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            work_description: "Seeded work".to_string(),
            gold_in,
            gold_out: 0.0,
            cash_in,
            labour_charge: 0.0,
            remarks: None,
            created_at: Some(Utc::now()),
        };
        self.records.lock().transactions.insert(0, transaction.clone());
        transaction
    }

    pub fn seed_job(&self, customer: &Customer, status: JobStatus) -> Job {
        let job = Job {
            id: Uuid::new_v4().to_string(),
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            work_description: "Seeded job".to_string(),
            status: status.to_string(),
            expected_delivery: None,
            created_at: Some(Utc::now()),
        };
        self.records.lock().jobs.insert(0, job.clone());
        job
    }

    /// Make `endpoint` fail with `error` until [`InMemoryLedger::recover`].
    pub fn fail(&self, endpoint: Endpoint, error: LedgerError) {
        self.failures.lock().insert(endpoint, error);
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.failures.lock().remove(&endpoint);
    }

    /// Hold every create until the returned handle is notified.
    pub fn hold_writes(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.write_gate.lock() = Some(gate.clone());
        gate
    }

    /// Hold filtered history and balance reads. Release every held read at
    /// once with `notify_waiters`.
    pub fn hold_detail_reads(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.detail_gate.lock() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> Vec<Call> {
        self.calls.lock().iter().filter(|call| call.endpoint() == endpoint).cloned().collect()
    }

    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.calls_to(endpoint).len()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    fn record(&self, call: Call) -> DomainResult<()> {
        let endpoint = call.endpoint();
        self.calls.lock().push(call);
        match self.failures.lock().get(&endpoint) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn wait_for_gate(&self) {
        wait_at(&self.write_gate).await;
    }

    async fn wait_for_detail_gate(&self) {
        wait_at(&self.detail_gate).await;
    }

    fn customer_name(&self, customer_id: &str) -> DomainResult<String> {
        self.records
            .lock()
            .customers
            .iter()
            .find(|customer| customer.id == customer_id)
            .map(|customer| customer.name.clone())
            .ok_or_else(|| LedgerError::Backend {
                status: 404,
                message: "Customer not found".to_string(),
            })
    }
}

async fn wait_at(slot: &Mutex<Option<Arc<Notify>>>) {
    let gate = slot.lock().clone();
    if let Some(gate) = gate {
        gate.notified().await;
    }
}

fn not_found(what: &str) -> LedgerError {
    LedgerError::Backend { status: 404, message: format!("{what} not found") }
}

#[async_trait]
impl LedgerApi for InMemoryLedger {
    async fn dashboard(&self) -> DomainResult<DashboardStats> {
        self.record(Call::Dashboard)?;
        let records = self.records.lock();
        Ok(DashboardStats {
            total_gold_balance: records.transactions.iter().map(|t| t.gold_in - t.gold_out).sum(),
            total_money_balance: records
                .transactions
                .iter()
                .map(|t| t.cash_in + t.labour_charge)
                .sum(),
            active_jobs_count: records
                .jobs
                .iter()
                .filter(|job| job.known_status().is_some_and(JobStatus::is_active))
                .count() as u64,
            total_customers: records.customers.len() as u64,
            total_transactions: records.transactions.len() as u64,
        })
    }

    async fn list_customers(&self) -> DomainResult<Vec<Customer>> {
        self.record(Call::ListCustomers)?;
        Ok(self.records.lock().customers.clone())
    }

    async fn create_customer(&self, payload: &NewCustomer) -> DomainResult<Customer> {
        self.record(Call::CreateCustomer(payload.clone()))?;
        self.wait_for_gate().await;
        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: payload.name.clone(),
            phone: Some(payload.phone.clone()),
            notes: Some(payload.notes.clone()),
            created_at: Utc::now(),
        };
        self.records.lock().customers.push(customer.clone());
        Ok(customer)
    }

    async fn delete_customer(&self, customer_id: &str) -> DomainResult<ApiMessage> {
        self.record(Call::DeleteCustomer(customer_id.to_string()))?;
        let mut records = self.records.lock();
        let before = records.customers.len();
        records.customers.retain(|customer| customer.id != customer_id);
        if records.customers.len() == before {
            return Err(not_found("Customer"));
        }
        Ok(ApiMessage { message: "Customer deleted successfully".to_string() })
    }

    async fn list_transactions(&self, customer_id: Option<&str>) -> DomainResult<Vec<Transaction>> {
        self.record(Call::ListTransactions(customer_id.map(str::to_string)))?;
        if customer_id.is_some() {
            self.wait_for_detail_gate().await;
        }
        Ok(self
            .records
            .lock()
            .transactions
            .iter()
            .filter(|row| customer_id.map_or(true, |id| row.customer_id == id))
            .cloned()
            .collect())
    }

    async fn create_transaction(&self, payload: &NewTransaction) -> DomainResult<Transaction> {
        self.record(Call::CreateTransaction(payload.clone()))?;
        self.wait_for_gate().await;
        let customer_name = self.customer_name(&payload.customer_id)?;
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            customer_id: payload.customer_id.clone(),
            customer_name,
            date: payload
                .date
                .clone()
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()),
            work_description: payload.work_description.clone(),
            gold_in: payload.gold_in,
            gold_out: payload.gold_out,
            cash_in: payload.cash_in,
            labour_charge: payload.labour_charge,
            remarks: Some(payload.remarks.clone()),
            created_at: Some(Utc::now()),
        };
        self.records.lock().transactions.insert(0, transaction.clone());
        Ok(transaction)
    }

    async fn delete_transaction(&self, transaction_id: &str) -> DomainResult<ApiMessage> {
        self.record(Call::DeleteTransaction(transaction_id.to_string()))?;
        let mut records = self.records.lock();
        let before = records.transactions.len();
        records.transactions.retain(|row| row.id != transaction_id);
        if records.transactions.len() == before {
            return Err(not_found("Transaction"));
        }
        Ok(ApiMessage { message: "Transaction deleted successfully".to_string() })
    }

    async fn customer_balance(&self, customer_id: &str) -> DomainResult<CustomerBalance> {
        self.record(Call::CustomerBalance(customer_id.to_string()))?;
        self.wait_for_detail_gate().await;
        let records = self.records.lock();
        let rows = records.transactions.iter().filter(|row| row.customer_id == customer_id);
        let (gold_balance, money_balance) = rows.fold((0.0, 0.0), |(gold, money), row| {
            (gold + row.gold_in - row.gold_out, money + row.cash_in + row.labour_charge)
        });
        Ok(CustomerBalance {
            customer_id: Some(customer_id.to_string()),
            gold_balance,
            money_balance,
        })
    }

    async fn list_jobs(&self, status: Option<JobStatus>) -> DomainResult<Vec<Job>> {
        self.record(Call::ListJobs(status))?;
        Ok(self
            .records
            .lock()
            .jobs
            .iter()
            .filter(|job| status.map_or(true, |wanted| job.known_status() == Some(wanted)))
            .cloned()
            .collect())
    }

    async fn create_job(&self, payload: &NewJob) -> DomainResult<Job> {
        self.record(Call::CreateJob(payload.clone()))?;
        self.wait_for_gate().await;
        let customer_name = self.customer_name(&payload.customer_id)?;
        let job = Job {
            id: Uuid::new_v4().to_string(),
            customer_id: payload.customer_id.clone(),
            customer_name,
            work_description: payload.work_description.clone(),
            status: payload.status.to_string(),
            expected_delivery: payload.expected_delivery.clone(),
            created_at: Some(Utc::now()),
        };
        self.records.lock().jobs.insert(0, job.clone());
        Ok(job)
    }

    async fn update_job_status(&self, job_id: &str, status: JobStatus) -> DomainResult<Job> {
        self.record(Call::UpdateJobStatus(job_id.to_string(), status))?;
        let mut records = self.records.lock();
        let job = records
            .jobs
            .iter_mut()
            .find(|job| job.id == job_id)
            .ok_or_else(|| not_found("Job"))?;
        job.status = status.to_string();
        Ok(job.clone())
    }

    async fn delete_job(&self, job_id: &str) -> DomainResult<ApiMessage> {
        self.record(Call::DeleteJob(job_id.to_string()))?;
        let mut records = self.records.lock();
        let before = records.jobs.len();
        records.jobs.retain(|job| job.id != job_id);
        if records.jobs.len() == before {
            return Err(not_found("Job"));
        }
        Ok(ApiMessage { message: "Job deleted successfully".to_string() })
    }

    async fn ping(&self) -> DomainResult<ApiMessage> {
        self.record(Call::Ping)?;
        Ok(ApiMessage { message: "Goldsmith Ledger API".to_string() })
    }
}

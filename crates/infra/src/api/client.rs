use std::time::Duration;

use async_trait::async_trait;
use goldledger_core::LedgerApi;
use goldledger_domain::constants::API_PREFIX;
use goldledger_domain::{
    ApiMessage, BackendConfig, Customer, CustomerBalance, DashboardStats, Job, JobStatus,
    LedgerError, NewCustomer, NewJob, NewTransaction, Result, Transaction,
};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{instrument, warn};
use url::Url;

use crate::config::parse_base_url;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Error body shape produced by FastAPI (`{"detail": ...}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// HTTP client for the ledger backend.
///
/// Paths are built below `{base_url}/api`; path segments and query values are
/// percent-encoded.
#[derive(Clone)]
pub struct LedgerApiClient {
    http: HttpClient,
    api_root: Url,
}

impl LedgerApiClient {
    /// Build a client for the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Config` if the base URL is not an absolute
    /// http(s) URL, or an error if the HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("goldledger/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_http_client(&config.base_url, http)
    }

    /// Build a client around an existing [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Config` if `base_url` is invalid.
    pub fn with_http_client(base_url: &str, http: HttpClient) -> Result<Self> {
        let mut api_root = parse_base_url(base_url)?;
        api_root.set_query(None);
        api_root.set_fragment(None);
        append_segments(&mut api_root, &[API_PREFIX.trim_start_matches('/')])?;
        Ok(Self { http, api_root })
    }

    /// `{base_url}/api`
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.api_root.clone();
        append_segments(&mut url, segments)?;
        Ok(url)
    }

    /// Send one request and decode a successful JSON body.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.http.send(request).await?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await.map_err(InfraError::from)?;

        if !status.is_success() {
            let error = map_status_error(status, &body);
            warn!(%url, %status, error = %error, "backend rejected request");
            return Err(error);
        }

        serde_json::from_slice(&body).map_err(|err| InfraError::from(err).into())
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.execute(self.http.request(Method::GET, url)).await
    }

    async fn delete(&self, url: Url) -> Result<ApiMessage> {
        self.execute(self.http.request(Method::DELETE, url)).await
    }
}

fn append_segments(url: &mut Url, segments: &[&str]) -> Result<()> {
    url.path_segments_mut()
        .map_err(|()| LedgerError::Config("Backend URL cannot be a base".into()))?
        .pop_if_empty()
        .extend(segments);
    Ok(())
}

/// Turn a non-success response into `LedgerError::Backend`, preferring the
/// FastAPI `detail` over the raw body.
fn map_status_error(status: StatusCode, body: &[u8]) -> LedgerError {
    let message = match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody { detail: serde_json::Value::String(detail) }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_string()
            } else {
                text
            }
        }
    };
    LedgerError::Backend { status: status.as_u16(), message }
}

#[async_trait]
impl LedgerApi for LedgerApiClient {
    #[instrument(skip(self))]
    async fn dashboard(&self) -> Result<DashboardStats> {
        self.get(self.endpoint(&["dashboard"])?).await
    }

    #[instrument(skip(self))]
    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.get(self.endpoint(&["customers"])?).await
    }

    #[instrument(skip(self, payload))]
    async fn create_customer(&self, payload: &NewCustomer) -> Result<Customer> {
        let url = self.endpoint(&["customers"])?;
        self.execute(self.http.request(Method::POST, url).json(payload)).await
    }

    #[instrument(skip(self))]
    async fn delete_customer(&self, customer_id: &str) -> Result<ApiMessage> {
        self.delete(self.endpoint(&["customers", customer_id])?).await
    }

    #[instrument(skip(self))]
    async fn list_transactions(&self, customer_id: Option<&str>) -> Result<Vec<Transaction>> {
        let mut request = self.http.request(Method::GET, self.endpoint(&["transactions"])?);
        if let Some(customer_id) = customer_id {
            request = request.query(&[("customer_id", customer_id)]);
        }
        self.execute(request).await
    }

    #[instrument(skip(self, payload))]
    async fn create_transaction(&self, payload: &NewTransaction) -> Result<Transaction> {
        let url = self.endpoint(&["transactions"])?;
        self.execute(self.http.request(Method::POST, url).json(payload)).await
    }

    #[instrument(skip(self))]
    async fn delete_transaction(&self, transaction_id: &str) -> Result<ApiMessage> {
        self.delete(self.endpoint(&["transactions", transaction_id])?).await
    }

    #[instrument(skip(self))]
    async fn customer_balance(&self, customer_id: &str) -> Result<CustomerBalance> {
        self.get(self.endpoint(&["customer", customer_id, "balance"])?).await
    }

    #[instrument(skip(self))]
    async fn list_jobs(&self, status: Option<JobStatus>) -> Result<Vec<Job>> {
        let mut request = self.http.request(Method::GET, self.endpoint(&["jobs"])?);
        if let Some(status) = status {
            request = request.query(&[("status", status.to_string())]);
        }
        self.execute(request).await
    }

    #[instrument(skip(self, payload))]
    async fn create_job(&self, payload: &NewJob) -> Result<Job> {
        let url = self.endpoint(&["jobs"])?;
        self.execute(self.http.request(Method::POST, url).json(payload)).await
    }

    #[instrument(skip(self))]
    async fn update_job_status(&self, job_id: &str, status: JobStatus) -> Result<Job> {
        let url = self.endpoint(&["jobs", job_id])?;
        let request = self.http.request(Method::PUT, url).query(&[("status", status.to_string())]);
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn delete_job(&self, job_id: &str) -> Result<ApiMessage> {
        self.delete(self.endpoint(&["jobs", job_id])?).await
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> Result<ApiMessage> {
        self.get(self.endpoint(&[""])?).await
    }
}

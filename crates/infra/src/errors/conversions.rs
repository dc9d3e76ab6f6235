//! Conversions from external infrastructure errors into domain errors.

use goldledger_domain::LedgerError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LedgerError);

impl From<InfraError> for LedgerError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LedgerError> for InfraError {
    fn from(value: LedgerError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLedgerError {
    fn into_ledger(self) -> LedgerError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LedgerError */
/* -------------------------------------------------------------------------- */

impl IntoLedgerError for HttpError {
    fn into_ledger(self) -> LedgerError {
        if self.is_timeout() {
            return LedgerError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return LedgerError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return LedgerError::Decode(self.to_string());
        }

        if self.is_builder() {
            return LedgerError::Internal(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return LedgerError::Backend {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        LedgerError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_ledger())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → LedgerError */
/* -------------------------------------------------------------------------- */

impl IntoLedgerError for UrlError {
    fn into_ledger(self) -> LedgerError {
        LedgerError::Config(format!("invalid backend URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_ledger())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → LedgerError */
/* -------------------------------------------------------------------------- */

impl IntoLedgerError for serde_json::Error {
    fn into_ledger(self) -> LedgerError {
        LedgerError::Decode(format!("unexpected response body: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_ledger())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

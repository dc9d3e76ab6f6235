//! Ledger transactions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::timestamp::flexible_utc;

/// One ledger line as returned by `GET /api/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub customer_id: String,
    /// Copied from the customer at creation time for list display.
    pub customer_name: String,
    /// Calendar date (`YYYY-MM-DD`) assigned by the backend.
    pub date: String,
    pub work_description: String,
    /// Grams received from the customer
    #[serde(default)]
    pub gold_in: f64,
    /// Grams handed back to the customer
    #[serde(default)]
    pub gold_out: f64,
    #[serde(default)]
    pub cash_in: f64,
    #[serde(default)]
    pub labour_charge: f64,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default, with = "flexible_utc::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/transactions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub customer_id: String,
    pub work_description: String,
    pub gold_in: f64,
    pub gold_out: f64,
    pub cash_in: f64,
    pub labour_charge: f64,
    pub remarks: String,
    /// Omitted when blank so the backend stamps today's date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

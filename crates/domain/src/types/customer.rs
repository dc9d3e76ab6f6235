//! Customer records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::timestamp::flexible_utc;

/// Customer as returned by `GET /api/customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(with = "flexible_utc")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/customers`.
///
/// Fields are sent exactly as typed; blank phone or notes travel as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub notes: String,
}

//! Domain types and models
//!
//! Records are owned by the backend; the console only holds copies. Each
//! entity comes with the payload used to create it.

pub mod customer;
pub mod job;
pub mod summary;
pub mod transaction;

use serde::{Deserialize, Serialize};

pub use customer::{Customer, NewCustomer};
pub use job::{Job, JobStatus, NewJob};
pub use summary::{CustomerBalance, DashboardStats};
pub use transaction::{NewTransaction, Transaction};

/// Plain `{ "message": ... }` acknowledgement returned by deletes and the
/// API root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

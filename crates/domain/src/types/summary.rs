//! Backend-computed aggregates

use serde::{Deserialize, Serialize};

/// Net position of one customer, from `GET /api/customer/{id}/balance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerBalance {
    #[serde(default)]
    pub customer_id: Option<String>,
    pub gold_balance: f64,
    pub money_balance: f64,
}

/// Shop-wide totals from `GET /api/dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_gold_balance: f64,
    pub total_money_balance: f64,
    pub active_jobs_count: u64,
    pub total_customers: u64,
    pub total_transactions: u64,
}

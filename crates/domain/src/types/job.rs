//! Repair and job orders

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::timestamp::flexible_utc;

/// Workflow state of a job.
///
/// Any state may follow any other; the console imposes no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delivered,
}

crate::impl_domain_status_conversions!(JobStatus {
    InProgress => "In Progress" | "in-progress" | "in_progress" | "inprogress",
    Completed => "Completed",
    Delivered => "Delivered",
});

impl JobStatus {
    /// Every selectable status, in display order.
    pub const ALL: [JobStatus; 3] = [Self::InProgress, Self::Completed, Self::Delivered];

    /// Jobs that still count as active on the dashboard.
    pub fn is_active(self) -> bool {
        matches!(self, Self::InProgress | Self::Completed)
    }
}

/// Job as returned by `GET /api/jobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub work_description: String,
    /// Label as stored by the backend, which accepts any string.
    pub status: String,
    #[serde(default)]
    pub expected_delivery: Option<String>,
    #[serde(default, with = "flexible_utc::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    /// The stored label as a known status, if it is one.
    pub fn known_status(&self) -> Option<JobStatus> {
        self.status.parse().ok()
    }
}

/// Body of `POST /api/jobs`.
///
/// `expected_delivery` is always present on the wire, as `null` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewJob {
    pub customer_id: String,
    pub work_description: String,
    pub status: JobStatus,
    pub expected_delivery: Option<String>,
}

use goldledger_domain::{JobStatus, LedgerError, NewJob, Result};

use super::{DraftForm, FieldSpec, RecordKind};

/// Draft of the "Create New Job" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub customer_id: String,
    pub work_description: String,
    pub status: JobStatus,
    pub expected_delivery: String,
}

impl DraftForm for JobDraft {
    type Payload = NewJob;

    const KIND: RecordKind = RecordKind::Job;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "customer_id",
            aliases: &["customer"],
            placeholder: "Select Customer",
            required: true,
        },
        FieldSpec {
            name: "work_description",
            aliases: &["work", "description"],
            placeholder: "Work Description",
            required: true,
        },
        FieldSpec { name: "status", aliases: &[], placeholder: "In Progress", required: false },
        FieldSpec {
            name: "expected_delivery",
            aliases: &["delivery", "due"],
            placeholder: "YYYY-MM-DD",
            required: false,
        },
    ];

    fn value(&self, field: &'static str) -> String {
        match field {
            "customer_id" => self.customer_id.clone(),
            "work_description" => self.work_description.clone(),
            "status" => self.status.to_string(),
            "expected_delivery" => self.expected_delivery.clone(),
            _ => String::new(),
        }
    }

    fn write(&mut self, field: &'static str, value: &str) -> Result<()> {
        match field {
            "customer_id" => self.customer_id = value.to_string(),
            "work_description" => self.work_description = value.to_string(),
            "status" => {
                self.status = value.parse::<JobStatus>().map_err(LedgerError::InvalidInput)?;
            }
            "expected_delivery" => self.expected_delivery = value.to_string(),
            other => return Err(LedgerError::Internal(format!("unhandled field {other}"))),
        }
        Ok(())
    }

    fn payload(&self) -> NewJob {
        let delivery = self.expected_delivery.trim();
        NewJob {
            customer_id: self.customer_id.clone(),
            work_description: self.work_description.clone(),
            status: self.status,
            expected_delivery: (!delivery.is_empty()).then(|| delivery.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_delivery_is_absent() {
        let draft = JobDraft {
            customer_id: "cust-1".into(),
            work_description: "Polish bangles".into(),
            expected_delivery: String::new(),
            ..JobDraft::default()
        };
        assert_eq!(draft.payload().expected_delivery, None);

        let whitespace = JobDraft { expected_delivery: "   ".into(), ..draft };
        assert_eq!(whitespace.payload().expected_delivery, None);
    }

    #[test]
    fn delivery_date_is_kept() {
        let mut draft = JobDraft::default();
        draft.set_field("delivery", "2024-07-15").unwrap();
        assert_eq!(draft.payload().expected_delivery.as_deref(), Some("2024-07-15"));
    }

    #[test]
    fn new_jobs_start_in_progress() {
        assert_eq!(JobDraft::default().payload().status, JobStatus::InProgress);
    }

    #[test]
    fn status_field_validates_input() {
        let mut draft = JobDraft::default();
        draft.set_field("status", "completed").unwrap();
        assert_eq!(draft.status, JobStatus::Completed);
        assert!(draft.set_field("status", "lost").is_err());
        assert_eq!(draft.status, JobStatus::Completed);
    }
}

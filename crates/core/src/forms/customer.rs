use goldledger_domain::{LedgerError, NewCustomer, Result};

use super::{DraftForm, FieldSpec, RecordKind};

/// Draft of the "Add New Customer" form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub phone: String,
    pub notes: String,
}

impl DraftForm for CustomerDraft {
    type Payload = NewCustomer;

    const KIND: RecordKind = RecordKind::Customer;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { name: "name", aliases: &[], placeholder: "Customer Name", required: true },
        FieldSpec {
            name: "phone",
            aliases: &["tel"],
            placeholder: "Phone Number",
            required: false,
        },
        FieldSpec { name: "notes", aliases: &["note"], placeholder: "Notes", required: false },
    ];

    fn value(&self, field: &'static str) -> String {
        match field {
            "name" => self.name.clone(),
            "phone" => self.phone.clone(),
            "notes" => self.notes.clone(),
            _ => String::new(),
        }
    }

    fn write(&mut self, field: &'static str, value: &str) -> Result<()> {
        let slot = match field {
            "name" => &mut self.name,
            "phone" => &mut self.phone,
            "notes" => &mut self.notes,
            other => return Err(LedgerError::Internal(format!("unhandled field {other}"))),
        };
        *slot = value.to_string();
        Ok(())
    }

    fn payload(&self) -> NewCustomer {
        NewCustomer {
            name: self.name.clone(),
            phone: self.phone.clone(),
            notes: self.notes.clone(),
        }
    }
}

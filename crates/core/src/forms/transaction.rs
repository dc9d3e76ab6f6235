use goldledger_domain::{LedgerError, NewTransaction, Result};

use super::{parse_amount, DraftForm, FieldSpec, RecordKind};

/// Draft of the "Add New Transaction" form.
///
/// Amounts are kept as typed text and coerced only when the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub customer_id: String,
    pub work_description: String,
    pub gold_in: String,
    pub gold_out: String,
    pub cash_in: String,
    pub labour_charge: String,
    pub remarks: String,
    pub date: String,
}

impl DraftForm for TransactionDraft {
    type Payload = NewTransaction;

    const KIND: RecordKind = RecordKind::Transaction;

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
        FieldSpec { name: "gold_in", aliases: &[], placeholder: "0.000", required: false },
        FieldSpec { name: "gold_out", aliases: &[], placeholder: "0.000", required: false },
        FieldSpec { name: "cash_in", aliases: &["cash"], placeholder: "0.00", required: false },
        FieldSpec {
            name: "labour_charge",
            aliases: &["labour", "labor"],
            placeholder: "0.00",
            required: false,
        },
        FieldSpec {
            name: "remarks",
            aliases: &["remark"],
            placeholder: "Remarks (optional)",
            required: false,
        },
        FieldSpec { name: "date", aliases: &[], placeholder: "today", required: false },
    ];

    fn value(&self, field: &'static str) -> String {
        match field {
            "customer_id" => self.customer_id.clone(),
            "work_description" => self.work_description.clone(),
            "gold_in" => self.gold_in.clone(),
            "gold_out" => self.gold_out.clone(),
            "cash_in" => self.cash_in.clone(),
            "labour_charge" => self.labour_charge.clone(),
            "remarks" => self.remarks.clone(),
            "date" => self.date.clone(),
            _ => String::new(),
        }
    }

    fn write(&mut self, field: &'static str, value: &str) -> Result<()> {
        let slot = match field {
            "customer_id" => &mut self.customer_id,
            "work_description" => &mut self.work_description,
            "gold_in" => &mut self.gold_in,
            "gold_out" => &mut self.gold_out,
            "cash_in" => &mut self.cash_in,
            "labour_charge" => &mut self.labour_charge,
            "remarks" => &mut self.remarks,
            "date" => &mut self.date,
            other => return Err(LedgerError::Internal(format!("unhandled field {other}"))),
        };
        *slot = value.to_string();
        Ok(())
    }

    fn payload(&self) -> NewTransaction {
        let date = self.date.trim();
        NewTransaction {
            customer_id: self.customer_id.clone(),
            work_description: self.work_description.clone(),
            gold_in: parse_amount(&self.gold_in),
            gold_out: parse_amount(&self.gold_out),
            cash_in: parse_amount(&self.cash_in),
            labour_charge: parse_amount(&self.labour_charge),
            remarks: self.remarks.clone(),
            date: (!date.is_empty()).then(|| date.to_string()),
        }
    }
}

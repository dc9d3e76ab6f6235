//! Creation forms
//!
//! Each form keeps a draft of the creatable fields as raw text, exactly as
//! typed. Normalisation (number coercion, blank-to-absent) happens once, when
//! the payload is built for submission.

mod customer;
mod job;
mod transaction;

use goldledger_domain::{LedgerError, Result};

pub use customer::CustomerDraft;
pub use job::JobDraft;
pub use transaction::TransactionDraft;

/// The three record kinds the console can create or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Customer,
    Transaction,
    Job,
}

impl RecordKind {
    pub fn noun(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Transaction => "transaction",
            Self::Job => "job",
        }
    }

    /// Label of the idle submit control.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Customer => "Add Customer",
            Self::Transaction => "Add Transaction",
            Self::Job => "Create Job",
        }
    }

    /// Label of the submit control while a request is in flight.
    pub fn pending_label(self) -> &'static str {
        match self {
            Self::Customer | Self::Transaction => "Adding...",
            Self::Job => "Creating...",
        }
    }

    pub fn created_message(self) -> &'static str {
        match self {
            Self::Customer => "Customer added successfully!",
            Self::Transaction => "Transaction added successfully!",
            Self::Job => "Job created successfully!",
        }
    }

    pub fn create_failed_message(self) -> &'static str {
        match self {
            Self::Customer => "Error adding customer",
            Self::Transaction => "Error adding transaction",
            Self::Job => "Error creating job",
        }
    }
}

/// Draft plus the busy flag that disables its submit control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<D> {
    pub draft: D,
    pub busy: bool,
}

impl<D: DraftForm> FormState<D> {
    /// Label the submit control shows right now.
    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            D::KIND.pending_label()
        } else {
            D::KIND.submit_label()
        }
    }
}

/// One editable input of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Alternative names accepted when editing.
    pub aliases: &'static [&'static str],
    pub placeholder: &'static str,
    pub required: bool,
}

impl FieldSpec {
    fn matches(&self, field: &str) -> bool {
        self.name.eq_ignore_ascii_case(field)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(field))
    }
}

/// Behaviour shared by the three creation forms.
pub trait DraftForm: Default + Clone {
    /// Body sent to the backend.
    type Payload;

    const KIND: RecordKind;

    /// Inputs in display order.
    const FIELDS: &'static [FieldSpec];

    /// Current raw text of a field, by canonical name.
    fn value(&self, field: &'static str) -> String;

    /// Apply one edit to a canonical field. Callers go through
    /// [`DraftForm::set_field`], which resolves aliases.
    fn write(&mut self, field: &'static str, value: &str) -> Result<()>;

    /// Normalised payload for submission.
    fn payload(&self) -> Self::Payload;

    /// Controlled-input update: store the new text of `field`.
    fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        let spec = Self::field_spec(field)?;
        self.write(spec.name, value)
    }

    fn field_spec(field: &str) -> Result<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.matches(field)).ok_or_else(|| {
            LedgerError::InvalidInput(format!(
                "unknown {} field '{}' (expected one of: {})",
                Self::KIND.noun(),
                field,
                Self::FIELDS.iter().map(|spec| spec.name).collect::<Vec<_>>().join(", ")
            ))
        })
    }

    /// Required inputs that are still empty. Whitespace counts as a value.
    fn missing_required(&self) -> Vec<&'static str> {
        Self::FIELDS
            .iter()
            .filter(|spec| spec.required && self.value(spec.name).is_empty())
            .map(|spec| spec.name)
            .collect()
    }

    /// Back to empty defaults.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Coerce typed text to a number the way a browser's `parseFloat` does.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"2.5g"` is `2.5`. Text without a numeric prefix, including the empty
/// string, is `0`. Non-finite results are also `0`.
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let digits_in = |from: usize| {
        bytes[from..].iter().take_while(|byte| byte.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = digits_in(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_in(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits + fraction_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits_in(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    trimmed[..end].parse::<f64>().ok().filter(|value| value.is_finite()).unwrap_or(0.0)
}

//! Entry forms: declared fields, per-field checks and the form lifecycle.
//!
//! # Invariants
//! - A form is `Open` until it is confirmed or cancelled; neither is undone.
//! - Field checks never touch storage: a form with any blank field is
//!   rejected with `MissingField` before typed checks run.

use crate::model::validation::{check_date, parse_integer, ValidationError};
use crate::service::gateway::RecordKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Declared type of one form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    /// `YYYY-MM-DD` calendar date.
    Date,
}

/// One labeled input of an entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
    /// Hint rendered while the input is empty.
    pub placeholder: &'static str,
}

/// Static description of an entry form.
#[derive(Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub kind: RecordKind,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
    pub success_message: &'static str,
}

pub static DOCTOR_FORM: FormSpec = FormSpec {
    kind: RecordKind::Doctor,
    title: "Add Doctor",
    fields: &[
        FieldSpec {
            label: "Name",
            kind: FieldKind::Text,
            placeholder: "",
        },
        FieldSpec {
            label: "Specialization",
            kind: FieldKind::Text,
            placeholder: "",
        },
    ],
    success_message: "Doctor added successfully!",
};

pub static PATIENT_FORM: FormSpec = FormSpec {
    kind: RecordKind::Patient,
    title: "Add Patient",
    fields: &[
        FieldSpec {
            label: "Name",
            kind: FieldKind::Text,
            placeholder: "",
        },
        FieldSpec {
            label: "Age",
            kind: FieldKind::Integer,
            placeholder: "years",
        },
    ],
    success_message: "Patient added successfully!",
};

pub static APPOINTMENT_FORM: FormSpec = FormSpec {
    kind: RecordKind::Appointment,
    title: "Schedule Appointment",
    fields: &[
        FieldSpec {
            label: "Patient ID",
            kind: FieldKind::Integer,
            placeholder: "",
        },
        FieldSpec {
            label: "Doctor ID",
            kind: FieldKind::Integer,
            placeholder: "",
        },
        FieldSpec {
            label: "Date",
            kind: FieldKind::Date,
            placeholder: "YYYY-MM-DD",
        },
    ],
    success_message: "Appointment scheduled successfully!",
};

/// Returns the entry form for a record kind.
pub fn form_spec(kind: RecordKind) -> &'static FormSpec {
    match kind {
        RecordKind::Doctor => &DOCTOR_FORM,
        RecordKind::Patient => &PATIENT_FORM,
        RecordKind::Appointment => &APPOINTMENT_FORM,
    }
}

/// Form-level rejection; the form stays open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(&'static str),
    InvalidField {
        label: &'static str,
        reason: ValidationError,
    },
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(label) => write!(f, "All fields are required! ({label} is empty)"),
            Self::InvalidField { reason, .. } => write!(f, "{reason}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingField(_) => None,
            Self::InvalidField { reason, .. } => Some(reason),
        }
    }
}

/// Field value after its declared type has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Date(String),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) | Self::Date(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// Checks raw inputs against the declared fields of `spec`.
///
/// Missing trailing values count as blank.
pub fn check_fields(spec: &FormSpec, values: &[String]) -> Result<Vec<FieldValue>, FormError> {
    let raw = |index: usize| values.get(index).map_or("", |value| value.trim());

    if let Some((_, field)) = spec
        .fields
        .iter()
        .enumerate()
        .find(|(index, _)| raw(*index).is_empty())
    {
        return Err(FormError::MissingField(field.label));
    }

    spec.fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let value = raw(index);
            let invalid = |reason| FormError::InvalidField {
                label: field.label,
                reason,
            };
            match field.kind {
                FieldKind::Text => Ok(FieldValue::Text(value.to_string())),
                FieldKind::Integer => parse_integer(field.label, value)
                    .map(FieldValue::Integer)
                    .map_err(invalid),
                FieldKind::Date => check_date(field.label, value)
                    .map(|()| FieldValue::Date(value.to_string()))
                    .map_err(invalid),
            }
        })
        .collect()
}

/// Lifecycle state of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Open,
    Confirmed,
    Cancelled,
}

/// One open entry form and the text typed into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    spec: &'static FormSpec,
    values: Vec<String>,
    state: FormState,
    error: Option<String>,
}

impl FormSession {
    pub fn new(spec: &'static FormSpec) -> Self {
        Self {
            spec,
            values: vec![String::new(); spec.fields.len()],
            state: FormState::Open,
            error: None,
        }
    }

    pub fn spec(&self) -> &'static FormSpec {
        self.spec
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == FormState::Open
    }

    /// Inline message from the last rejected submit.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the text of field `index`; out-of-range indexes are ignored.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn push_char(&mut self, index: usize, ch: char) {
        if let Some(slot) = self.values.get_mut(index) {
            slot.push(ch);
        }
    }

    pub fn pop_char(&mut self, index: usize) {
        if let Some(slot) = self.values.get_mut(index) {
            slot.pop();
        }
    }

    pub fn cancel(&mut self) {
        if self.is_open() {
            self.state = FormState::Cancelled;
        }
    }

    pub(crate) fn reject(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(crate) fn confirm(&mut self) {
        self.state = FormState::Confirmed;
        self.error = None;
    }
}

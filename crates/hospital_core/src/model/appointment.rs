//! Appointment record.
//!
//! # Invariants
//! - `patient_id`/`doctor_id` reference existing rows at insert time; the
//!   gateway checks this before writing.
//! - `date` is stored as `YYYY-MM-DD` text.

use super::validation::{check_date, ValidationError};
use super::RecordId;
use serde::{Deserialize, Serialize};

/// Persisted appointment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub date: String,
}

/// Insert payload for an appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub date: String,
}

impl NewAppointment {
    pub fn new(patient_id: RecordId, doctor_id: RecordId, date: impl Into<String>) -> Self {
        Self {
            patient_id,
            doctor_id,
            date: date.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_date("date", &self.date)
    }

    pub(crate) fn into_record(self, id: RecordId) -> Appointment {
        Appointment {
            id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            date: self.date,
        }
    }
}

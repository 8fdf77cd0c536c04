//! Patient record.

use super::validation::{parse_integer, require_text, ValidationError};
use super::RecordId;
use serde::{Deserialize, Serialize};

/// Persisted patient row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: RecordId,
    pub name: String,
    /// Whole years. No range is enforced.
    pub age: i64,
}

/// Insert payload for a patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
}

impl NewPatient {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Builds a payload from raw form text, coercing `age` to an integer.
    ///
    /// # Errors
    /// - `ValidationError::NotAnInteger` when `age` is not a whole number.
    pub fn parse(name: impl Into<String>, age: &str) -> Result<Self, ValidationError> {
        let age = parse_integer("age", age)?;
        Ok(Self::new(name, age))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }

    pub(crate) fn into_record(self, id: RecordId) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

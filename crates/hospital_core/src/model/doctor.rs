//! Doctor record.

use super::validation::{require_text, ValidationError};
use super::RecordId;
use serde::{Deserialize, Serialize};

/// Persisted doctor row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialization: String,
}

/// Insert payload for a doctor; identity is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
}

impl NewDoctor {
    pub fn new(name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
        }
    }

    /// Both fields are required text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("specialization", &self.specialization)?;
        Ok(())
    }

    pub(crate) fn into_record(self, id: RecordId) -> Doctor {
        Doctor {
            id,
            name: self.name,
            specialization: self.specialization,
        }
    }
}

//! Desk record repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert and full-table list APIs over the three record tables.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call payload `validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Lists are returned in identity order, which is insertion order.

use crate::db::DbError;
use crate::model::appointment::{Appointment, NewAppointment};
use crate::model::doctor::{Doctor, NewDoctor};
use crate::model::patient::{NewPatient, Patient};
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    /// The store refused the write (NOT NULL, CHECK, FOREIGN KEY, ...).
    Constraint(String),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Constraint(message) => write!(f, "constraint violated: {message}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Constraint(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(message.unwrap_or_else(|| failure.to_string()))
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}

/// Repository interface for desk record operations.
pub trait RecordRepository {
    fn insert_doctor(&self, doctor: NewDoctor) -> RepoResult<Doctor>;
    fn insert_patient(&self, patient: NewPatient) -> RepoResult<Patient>;
    fn insert_appointment(&self, appointment: NewAppointment) -> RepoResult<Appointment>;
    fn doctor_exists(&self, id: RecordId) -> RepoResult<bool>;
    fn patient_exists(&self, id: RecordId) -> RepoResult<bool>;
    fn list_doctors(&self) -> RepoResult<Vec<Doctor>>;
    fn list_patients(&self) -> RepoResult<Vec<Patient>>;
    fn list_appointments(&self) -> RepoResult<Vec<Appointment>>;
}

/// SQLite-backed record repository borrowing the gateway connection.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn exists(&self, sql: &str, id: RecordId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(sql, [id], |row| row.get(0))?;
        Ok(exists == 1)
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn insert_doctor(&self, doctor: NewDoctor) -> RepoResult<Doctor> {
        doctor.validate()?;

        self.conn.execute(
            "INSERT INTO doctors (name, specialization) VALUES (?1, ?2);",
            params![doctor.name.as_str(), doctor.specialization.as_str()],
        )?;

        Ok(doctor.into_record(self.conn.last_insert_rowid()))
    }

    fn insert_patient(&self, patient: NewPatient) -> RepoResult<Patient> {
        patient.validate()?;

        self.conn.execute(
            "INSERT INTO patients (name, age) VALUES (?1, ?2);",
            params![patient.name.as_str(), patient.age],
        )?;

        Ok(patient.into_record(self.conn.last_insert_rowid()))
    }

    fn insert_appointment(&self, appointment: NewAppointment) -> RepoResult<Appointment> {
        appointment.validate()?;

        self.conn.execute(
            "INSERT INTO appointments (patient_id, doctor_id, date) VALUES (?1, ?2, ?3);",
            params![
                appointment.patient_id,
                appointment.doctor_id,
                appointment.date.as_str(),
            ],
        )?;

        Ok(appointment.into_record(self.conn.last_insert_rowid()))
    }

    fn doctor_exists(&self, id: RecordId) -> RepoResult<bool> {
        self.exists("SELECT EXISTS(SELECT 1 FROM doctors WHERE id = ?1);", id)
    }

    fn patient_exists(&self, id: RecordId) -> RepoResult<bool> {
        self.exists("SELECT EXISTS(SELECT 1 FROM patients WHERE id = ?1);", id)
    }

    fn list_doctors(&self) -> RepoResult<Vec<Doctor>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, specialization FROM doctors ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut doctors = Vec::new();

        while let Some(row) = rows.next()? {
            doctors.push(Doctor {
                id: row.get("id")?,
                name: row.get("name")?,
                specialization: row.get("specialization")?,
            });
        }

        Ok(doctors)
    }

    fn list_patients(&self) -> RepoResult<Vec<Patient>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, age FROM patients ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut patients = Vec::new();

        while let Some(row) = rows.next()? {
            patients.push(parse_patient_row(row)?);
        }

        Ok(patients)
    }

    fn list_appointments(&self) -> RepoResult<Vec<Appointment>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, patient_id, doctor_id, date FROM appointments ORDER BY id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut appointments = Vec::new();

        while let Some(row) = rows.next()? {
            appointments.push(parse_appointment_row(row)?);
        }

        Ok(appointments)
    }
}

// `age` has INTEGER affinity only; a file written by an older build may hold
// text there.
fn parse_patient_row(row: &Row<'_>) -> RepoResult<Patient> {
    let id: RecordId = row.get("id")?;
    let age = match row.get_ref("age")? {
        ValueRef::Integer(value) => value,
        other => {
            return Err(RepoError::InvalidData(format!(
                "non-integer age of type {} in patients.age for id {id}",
                other.data_type()
            )));
        }
    };

    Ok(Patient {
        id,
        name: row.get("name")?,
        age,
    })
}

fn parse_appointment_row(row: &Row<'_>) -> RepoResult<Appointment> {
    let id: RecordId = row.get("id")?;
    let required_id = |column: &str| -> RepoResult<RecordId> {
        row.get::<_, Option<RecordId>>(column)?.ok_or_else(|| {
            RepoError::InvalidData(format!("missing {column} in appointments for id {id}"))
        })
    };

    Ok(Appointment {
        id,
        patient_id: required_id("patient_id")?,
        doctor_id: required_id("doctor_id")?,
        date: row.get::<_, Option<String>>("date")?.ok_or_else(|| {
            RepoError::InvalidData(format!("missing date in appointments for id {id}"))
        })?,
    })
}

//! Storage gateway: the single owner of the desk database connection.
//!
//! # Responsibility
//! - Own the SQLite connection for the whole process lifetime.
//! - Translate desk operations (add/schedule/list) into repository calls.
//! - Report every failure as a typed `GatewayError`; nothing is retried.
//!
//! # Invariants
//! - Only the gateway mutates persisted state.
//! - Appointments are written only when both referenced rows exist.
//! - After `close()` every operation fails with `GatewayError::Closed`.

use crate::db::{migrations::apply_migrations, open_db, open_db_in_memory, DbError};
use crate::model::appointment::{Appointment, NewAppointment};
use crate::model::doctor::{Doctor, NewDoctor};
use crate::model::patient::{NewPatient, Patient};
use crate::model::validation::ValidationError;
use crate::model::RecordId;
use crate::repo::record_repo::{RecordRepository, RepoError, SqliteRecordRepository};
use log::{info, warn};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Record kinds referenced by `GatewayError::NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Doctor,
    Patient,
    Appointment,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Patient => "patient",
            Self::Appointment => "appointment",
        }
    }
}

/// Errors from storage gateway operations.
#[derive(Debug)]
pub enum GatewayError {
    /// A required field was blank or the store rejected the row.
    Constraint(String),
    /// Input could not be coerced to the declared type.
    InvalidArgument(ValidationError),
    /// A referenced record does not exist.
    NotFound { kind: RecordKind, id: RecordId },
    /// The connection was already released.
    Closed,
    /// Storage transport or schema failure.
    Db(DbError),
    /// Persisted rows could not be decoded.
    InvalidData(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constraint(message) => write!(f, "{message}"),
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{} not found: {id}", kind.label()),
            Self::Closed => write!(f, "storage is closed"),
            Self::Db(err) => write!(f, "storage error: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for GatewayError {
    fn from(value: ValidationError) -> Self {
        if let ValidationError::EmptyField(_) = &value {
            return Self::Constraint(value.to_string());
        }
        Self::InvalidArgument(value)
    }
}

impl From<RepoError> for GatewayError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => err.into(),
            RepoError::Constraint(message) => Self::Constraint(message),
            RepoError::Db(err) => Self::Db(err),
            RepoError::InvalidData(message) => Self::InvalidData(message),
        }
    }
}

impl From<DbError> for GatewayError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl GatewayError {
    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Constraint(_) => "constraint",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::NotFound { .. } => "not_found",
            Self::Closed => "closed",
            Self::Db(_) => "db",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

/// Explicitly-owned storage gateway, constructed once at startup.
pub struct StorageGateway {
    conn: Option<Connection>,
}

impl StorageGateway {
    /// Opens the database file at `path` and ensures the schema exists.
    ///
    /// # Errors
    /// - `GatewayError::Db` when the file cannot be opened or its schema is
    ///   newer than this binary. Callers treat this as fatal.
    pub fn open(path: impl AsRef<Path>) -> GatewayResult<Self> {
        Ok(Self::from_connection(open_db(path)?))
    }

    /// Opens a throwaway in-memory database with the schema in place.
    pub fn open_in_memory() -> GatewayResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self { conn: Some(conn) }
    }

    /// Ensures the three record tables exist.
    ///
    /// Safe to call any number of times; existing rows are untouched.
    pub fn initialize(&mut self) -> GatewayResult<()> {
        let conn = self.conn.as_mut().ok_or(GatewayError::Closed)?;
        apply_migrations(conn)?;
        Ok(())
    }

    /// Inserts a doctor and returns the stored row.
    pub fn add_doctor(&self, name: &str, specialization: &str) -> GatewayResult<Doctor> {
        let payload = NewDoctor::new(name.trim(), specialization.trim());
        let result = self
            .repo()
            .and_then(|repo| Ok(repo.insert_doctor(payload)?));
        log_write("doctor_add", result, |doctor| doctor.id)
    }

    /// Inserts a patient, coercing the `age` text to an integer.
    ///
    /// # Errors
    /// - `GatewayError::InvalidArgument` when `age` is not a whole number.
    /// - `GatewayError::Constraint` when `name` is blank.
    pub fn add_patient(&self, name: &str, age: &str) -> GatewayResult<Patient> {
        let result = NewPatient::parse(name.trim(), age)
            .map_err(GatewayError::from)
            .and_then(|payload| Ok(self.repo()?.insert_patient(payload)?));
        log_write("patient_add", result, |patient| patient.id)
    }

    /// Inserts an appointment after checking both references exist.
    ///
    /// # Errors
    /// - `GatewayError::NotFound` for a missing patient (checked first) or
    ///   doctor. No row is written in that case.
    /// - `GatewayError::InvalidArgument` when `date` is not `YYYY-MM-DD`.
    pub fn add_appointment(
        &self,
        patient_id: RecordId,
        doctor_id: RecordId,
        date: &str,
    ) -> GatewayResult<Appointment> {
        let result = self.repo().and_then(|repo| {
            if !repo.patient_exists(patient_id)? {
                return Err(GatewayError::NotFound {
                    kind: RecordKind::Patient,
                    id: patient_id,
                });
            }
            if !repo.doctor_exists(doctor_id)? {
                return Err(GatewayError::NotFound {
                    kind: RecordKind::Doctor,
                    id: doctor_id,
                });
            }
            let payload = NewAppointment::new(patient_id, doctor_id, date.trim());
            Ok(repo.insert_appointment(payload)?)
        });
        log_write("appointment_add", result, |appointment| appointment.id)
    }

    /// Returns every doctor in identity order.
    pub fn list_doctors(&self) -> GatewayResult<Vec<Doctor>> {
        log_read("doctor_list", self.repo().and_then(|repo| Ok(repo.list_doctors()?)))
    }

    /// Returns every patient in identity order.
    pub fn list_patients(&self) -> GatewayResult<Vec<Patient>> {
        log_read("patient_list", self.repo().and_then(|repo| Ok(repo.list_patients()?)))
    }

    /// Returns every appointment in identity order.
    pub fn list_appointments(&self) -> GatewayResult<Vec<Appointment>> {
        log_read(
            "appointment_list",
            self.repo().and_then(|repo| Ok(repo.list_appointments()?)),
        )
    }

    /// Whether `close()` has already released the connection.
    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    /// Releases the connection. Calling this again is a no-op.
    pub fn close(&mut self) -> GatewayResult<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        match conn.close() {
            Ok(()) => {
                info!("event=db_close module=gateway status=ok");
                Ok(())
            }
            Err((_conn, err)) => {
                warn!("event=db_close module=gateway status=error error={err}");
                Err(DbError::Sqlite(err).into())
            }
        }
    }

    fn repo(&self) -> GatewayResult<SqliteRecordRepository<'_>> {
        self.conn
            .as_ref()
            .map(SqliteRecordRepository::new)
            .ok_or(GatewayError::Closed)
    }
}

fn log_write<T>(
    event: &str,
    result: GatewayResult<T>,
    id_of: impl Fn(&T) -> RecordId,
) -> GatewayResult<T> {
    match &result {
        Ok(record) => info!(
            "event={event} module=gateway status=ok id={}",
            id_of(record)
        ),
        Err(err) => warn!(
            "event={event} module=gateway status=error error_code={}",
            err.code()
        ),
    }
    result
}

fn log_read<T>(event: &str, result: GatewayResult<Vec<T>>) -> GatewayResult<Vec<T>> {
    match &result {
        Ok(rows) => info!("event={event} module=gateway status=ok rows={}", rows.len()),
        Err(err) => warn!(
            "event={event} module=gateway status=error error_code={} error={err}",
            err.code()
        ),
    }
    result
}

//! Core records logic for the hospital desk application.
//! This crate owns storage, validation and the form/list lifecycle; the
//! binary crate only renders screens and forwards key presses.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use controller::actions::{Action, ActionEntry, ACTIONS};
pub use controller::form::{FieldKind, FieldSpec, FormError, FormSession, FormSpec, FormState};
pub use controller::table::TableView;
pub use controller::{InteractionController, Notice, Screen, SubmitError};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::appointment::{Appointment, NewAppointment};
pub use model::doctor::{Doctor, NewDoctor};
pub use model::patient::{NewPatient, Patient};
pub use model::validation::ValidationError;
pub use model::RecordId;
pub use repo::record_repo::{RecordRepository, RepoError, RepoResult, SqliteRecordRepository};
pub use service::gateway::{GatewayError, GatewayResult, RecordKind, StorageGateway};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

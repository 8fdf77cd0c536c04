//! Interaction controller: form and list lifecycle above the storage gateway.
//!
//! # Responsibility
//! - Map menu actions to handlers through the `ACTIONS` table.
//! - Check form input (blank fields, declared types) before any write.
//! - Forward accepted input to the gateway and turn results into screens.
//!
//! # Invariants
//! - The controller owns the gateway; there is no ambient connection.
//! - Gateway failures become on-screen messages, never panics.
//! - A rejected form stays open with its input intact.

pub mod actions;
pub mod form;
pub mod table;

use self::actions::{action_entry, Action};
use self::form::{check_fields, form_spec, FieldValue, FormError, FormSession};
use self::table::TableView;
use crate::model::RecordId;
use crate::service::gateway::{GatewayError, GatewayResult, RecordKind, StorageGateway};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// What the front-end should show next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Form(FormSession),
    List(TableView),
    Exit,
}

/// One-line status shown on the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Info(message) | Self::Error(message) => message,
        }
    }
}

/// Why a submit did not confirm the form.
#[derive(Debug)]
pub enum SubmitError {
    /// Input was rejected before reaching storage.
    Form(FormError),
    /// Storage refused the write.
    Storage(GatewayError),
    /// The form was already confirmed or cancelled.
    FormClosed,
    /// Checked values do not match the fields the form kind expects.
    UnexpectedShape(RecordKind),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::FormClosed => write!(f, "form is no longer open"),
            Self::UnexpectedShape(kind) => {
                write!(f, "unexpected field layout for {} form", kind.label())
            }
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::FormClosed | Self::UnexpectedShape(_) => None,
        }
    }
}

impl From<FormError> for SubmitError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<GatewayError> for SubmitError {
    fn from(value: GatewayError) -> Self {
        Self::Storage(value)
    }
}

/// Drives forms and lists for one gateway.
pub struct InteractionController {
    gateway: StorageGateway,
    notice: Option<Notice>,
}

impl InteractionController {
    pub fn new(gateway: StorageGateway) -> Self {
        Self {
            gateway,
            notice: None,
        }
    }

    pub fn gateway(&self) -> &StorageGateway {
        &self.gateway
    }

    /// Latest confirmation or error for the main menu.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Runs the handler registered for `action`.
    pub fn dispatch(&mut self, action: Action) -> Screen {
        debug!("event=action_dispatch module=controller action={action:?}");
        match action_entry(action) {
            Some(entry) => (entry.handler)(self),
            None => Screen::Menu,
        }
    }

    /// Opens a blank entry form for `kind`.
    pub fn present_form(&self, kind: RecordKind) -> FormSession {
        debug!("event=form_open module=controller form={}", kind.label());
        FormSession::new(form_spec(kind))
    }

    /// Checks the form input and forwards it to the gateway.
    ///
    /// On success the form is confirmed and the success notice is stored
    /// for the menu. On any error the message is attached to the form,
    /// which stays open.
    pub fn submit(&mut self, session: &mut FormSession) -> Result<RecordId, SubmitError> {
        if !session.is_open() {
            return Err(SubmitError::FormClosed);
        }

        match self.write_form(session) {
            Ok(id) => {
                let spec = session.spec();
                info!(
                    "event=form_submit module=controller status=ok form={} id={id}",
                    spec.kind.label()
                );
                session.confirm();
                self.notice = Some(Notice::Info(format!(
                    "{} (ID {id})",
                    spec.success_message
                )));
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=form_submit module=controller status=rejected form={} reason={}",
                    session.spec().kind.label(),
                    rejection_code(&err)
                );
                session.reject(err.to_string());
                Err(err)
            }
        }
    }

    fn write_form(&self, session: &FormSession) -> Result<RecordId, SubmitError> {
        let kind = session.spec().kind;
        let values = check_fields(session.spec(), session.values())?;

        let id = match (kind, values.as_slice()) {
            (RecordKind::Doctor, [FieldValue::Text(name), FieldValue::Text(specialization)]) => {
                self.gateway.add_doctor(name, specialization)?.id
            }
            (RecordKind::Patient, [FieldValue::Text(name), age @ FieldValue::Integer(_)]) => {
                self.gateway.add_patient(name, &age.to_string())?.id
            }
            (
                RecordKind::Appointment,
                [FieldValue::Integer(patient_id), FieldValue::Integer(doctor_id), FieldValue::Date(date)],
            ) => {
                self.gateway
                    .add_appointment(*patient_id, *doctor_id, date)?
                    .id
            }
            _ => return Err(SubmitError::UnexpectedShape(kind)),
        };
        Ok(id)
    }

    /// Loads every row of `kind` as a table.
    pub fn present_list(&self, kind: RecordKind) -> GatewayResult<TableView> {
        let table = match kind {
            RecordKind::Doctor => TableView::doctors(&self.gateway.list_doctors()?),
            RecordKind::Patient => TableView::patients(&self.gateway.list_patients()?),
            RecordKind::Appointment => {
                TableView::appointments(&self.gateway.list_appointments()?)
            }
        };
        Ok(table)
    }

    /// Like `present_list`, falling back to the menu with an error notice.
    pub(crate) fn list_screen(&mut self, kind: RecordKind) -> Screen {
        match self.present_list(kind) {
            Ok(table) => Screen::List(table),
            Err(err) => {
                self.notice = Some(Notice::Error(format!(
                    "Could not load {} list: {err}",
                    kind.label()
                )));
                Screen::Menu
            }
        }
    }

    /// Closes the gateway. Safe to call more than once.
    pub fn shutdown(&mut self) -> GatewayResult<()> {
        self.gateway.close()
    }
}

fn rejection_code(err: &SubmitError) -> &'static str {
    match err {
        SubmitError::Form(FormError::MissingField(_)) => "missing_field",
        SubmitError::Form(FormError::InvalidField { .. }) => "invalid_field",
        SubmitError::Storage(err) => err.code(),
        SubmitError::FormClosed => "form_closed",
        SubmitError::UnexpectedShape(_) => "unexpected_shape",
    }
}

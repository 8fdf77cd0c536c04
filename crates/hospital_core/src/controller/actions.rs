//! Main-menu actions and their handler lookup table.

use super::{InteractionController, Screen};
use crate::service::gateway::RecordKind;

/// Everything the main menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddDoctor,
    AddPatient,
    ScheduleAppointment,
    ViewDoctors,
    ViewPatients,
    ViewAppointments,
    Exit,
}

pub type ActionHandler = fn(&mut InteractionController) -> Screen;

/// One menu row: the action, its label and the handler it dispatches to.
pub struct ActionEntry {
    pub action: Action,
    pub label: &'static str,
    pub handler: ActionHandler,
}

/// Menu order is table order.
pub static ACTIONS: [ActionEntry; 7] = [
    ActionEntry {
        action: Action::AddDoctor,
        label: "Add Doctor",
        handler: open_doctor_form,
    },
    ActionEntry {
        action: Action::AddPatient,
        label: "Add Patient",
        handler: open_patient_form,
    },
    ActionEntry {
        action: Action::ScheduleAppointment,
        label: "Schedule Appointment",
        handler: open_appointment_form,
    },
    ActionEntry {
        action: Action::ViewDoctors,
        label: "View Doctors",
        handler: view_doctors,
    },
    ActionEntry {
        action: Action::ViewPatients,
        label: "View Patients",
        handler: view_patients,
    },
    ActionEntry {
        action: Action::ViewAppointments,
        label: "View Appointments",
        handler: view_appointments,
    },
    ActionEntry {
        action: Action::Exit,
        label: "Exit",
        handler: exit,
    },
];

/// Looks up the table entry for `action`.
pub fn action_entry(action: Action) -> Option<&'static ActionEntry> {
    ACTIONS.iter().find(|entry| entry.action == action)
}

fn open_doctor_form(controller: &mut InteractionController) -> Screen {
    Screen::Form(controller.present_form(RecordKind::Doctor))
}

fn open_patient_form(controller: &mut InteractionController) -> Screen {
    Screen::Form(controller.present_form(RecordKind::Patient))
}

fn open_appointment_form(controller: &mut InteractionController) -> Screen {
    Screen::Form(controller.present_form(RecordKind::Appointment))
}

fn view_doctors(controller: &mut InteractionController) -> Screen {
    controller.list_screen(RecordKind::Doctor)
}

fn view_patients(controller: &mut InteractionController) -> Screen {
    controller.list_screen(RecordKind::Patient)
}

fn view_appointments(controller: &mut InteractionController) -> Screen {
    controller.list_screen(RecordKind::Appointment)
}

fn exit(_controller: &mut InteractionController) -> Screen {
    Screen::Exit
}

#[cfg(test)]
mod tests {
    use super::{action_entry, Action, ACTIONS};

    #[test]
    fn every_action_has_exactly_one_entry() {
        let all = [
            Action::AddDoctor,
            Action::AddPatient,
            Action::ScheduleAppointment,
            Action::ViewDoctors,
            Action::ViewPatients,
            Action::ViewAppointments,
            Action::Exit,
        ];
        for action in all {
            let count = ACTIONS.iter().filter(|entry| entry.action == action).count();
            assert_eq!(count, 1, "{action:?}");
            assert!(action_entry(action).is_some());
        }
    }

    #[test]
    fn exit_is_the_last_menu_row() {
        assert_eq!(ACTIONS.last().map(|entry| entry.label), Some("Exit"));
    }
}

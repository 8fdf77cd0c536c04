use hospital_core::controller::form::FieldKind;
use hospital_core::{
    Action, FormError, FormSession, FormState, InteractionController, Notice, RecordKind, Screen,
    StorageGateway, SubmitError, ACTIONS,
};

fn controller() -> InteractionController {
    InteractionController::new(StorageGateway::open_in_memory().unwrap())
}

fn open_form(controller: &mut InteractionController, action: Action) -> FormSession {
    match controller.dispatch(action) {
        Screen::Form(session) => session,
        other => panic!("expected form screen, got {other:?}"),
    }
}

fn fill(session: &mut FormSession, values: &[&str]) {
    for (index, value) in values.iter().enumerate() {
        session.set_value(index, *value);
    }
}

#[test]
fn menu_lists_seven_actions_in_order() {
    let labels = ACTIONS.iter().map(|entry| entry.label).collect::<Vec<_>>();
    assert_eq!(
        labels,
        vec![
            "Add Doctor",
            "Add Patient",
            "Schedule Appointment",
            "View Doctors",
            "View Patients",
            "View Appointments",
            "Exit",
        ]
    );
}

#[test]
fn appointment_form_declares_field_types() {
    let mut controller = controller();
    let session = open_form(&mut controller, Action::ScheduleAppointment);

    let kinds = session
        .spec()
        .fields
        .iter()
        .map(|field| field.kind)
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![FieldKind::Integer, FieldKind::Integer, FieldKind::Date]
    );
    assert_eq!(session.spec().fields[2].placeholder, "YYYY-MM-DD");
}

#[test]
fn valid_doctor_submit_confirms_and_notifies() {
    let mut controller = controller();
    let mut session = open_form(&mut controller, Action::AddDoctor);
    fill(&mut session, &["Dr. Amina", "Cardiology"]);

    let id = controller.submit(&mut session).unwrap();

    assert_eq!(id, 1);
    assert_eq!(session.state(), FormState::Confirmed);
    assert_eq!(
        controller.notice(),
        Some(&Notice::Info("Doctor added successfully! (ID 1)".to_string()))
    );

    match controller.dispatch(Action::ViewDoctors) {
        Screen::List(table) => {
            assert_eq!(table.columns, &["ID", "Name", "Specialization"]);
            assert_eq!(
                table.rows,
                vec![vec![
                    "1".to_string(),
                    "Dr. Amina".to_string(),
                    "Cardiology".to_string(),
                ]]
            );
        }
        other => panic!("expected list screen, got {other:?}"),
    }
}

#[test]
fn empty_field_keeps_form_open_and_writes_nothing() {
    let mut controller = controller();
    let mut session = open_form(&mut controller, Action::AddPatient);
    fill(&mut session, &["Omar", "  "]);

    let err = controller.submit(&mut session).unwrap_err();

    assert!(matches!(err, SubmitError::Form(FormError::MissingField("Age"))));
    assert!(session.is_open());
    assert!(session.error().unwrap().contains("All fields are required"));
    assert!(controller.gateway().list_patients().unwrap().is_empty());
    assert_eq!(controller.notice(), None);
}

#[test]
fn storage_error_is_shown_inline_and_form_can_be_corrected() {
    let mut controller = controller();
    let mut session = open_form(&mut controller, Action::ScheduleAppointment);
    fill(&mut session, &["1", "1", "2024-05-01"]);

    let err = controller.submit(&mut session).unwrap_err();
    assert!(matches!(err, SubmitError::Storage(_)));
    assert!(session.is_open());
    assert_eq!(session.error(), Some("patient not found: 1"));

    controller.gateway().add_patient("Omar", "34").unwrap();
    controller.gateway().add_doctor("Dr. Amina", "Cardiology").unwrap();
    controller.submit(&mut session).unwrap();

    assert_eq!(session.state(), FormState::Confirmed);
    assert_eq!(session.error(), None);
}

#[test]
fn submit_after_cancel_is_rejected() {
    let mut controller = controller();
    let mut session = open_form(&mut controller, Action::AddDoctor);
    fill(&mut session, &["Dr. Amina", "Cardiology"]);
    session.cancel();

    let err = controller.submit(&mut session).unwrap_err();

    assert!(matches!(err, SubmitError::FormClosed));
    assert_eq!(session.state(), FormState::Cancelled);
    assert!(controller.gateway().list_doctors().unwrap().is_empty());
}

#[test]
fn list_failure_returns_to_menu_with_error_notice() {
    let mut controller = controller();
    controller.shutdown().unwrap();

    let screen = controller.dispatch(Action::ViewPatients);

    assert_eq!(screen, Screen::Menu);
    assert!(matches!(controller.notice(), Some(Notice::Error(_))));
}

#[test]
fn exit_action_ends_the_session() {
    let mut controller = controller();
    assert_eq!(controller.dispatch(Action::Exit), Screen::Exit);
}

#[test]
fn present_list_renders_appointment_columns() {
    let controller = controller();
    controller.gateway().add_patient("Omar", "34").unwrap();
    controller.gateway().add_doctor("Dr. Amina", "Cardiology").unwrap();
    controller
        .gateway()
        .add_appointment(1, 1, "2024-05-01")
        .unwrap();

    let table = controller.present_list(RecordKind::Appointment).unwrap();

    assert_eq!(table.title, "Appointments");
    assert_eq!(table.columns, &["ID", "Patient ID", "Doctor ID", "Date"]);
    assert_eq!(table.rows[0], vec!["1", "1", "1", "2024-05-01"]);
}

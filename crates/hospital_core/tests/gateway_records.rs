use hospital_core::{Doctor, GatewayError, Patient, RecordKind, StorageGateway};
use std::collections::HashSet;

#[test]
fn add_doctor_then_list_returns_single_row() {
    let gateway = StorageGateway::open_in_memory().unwrap();

    let created = gateway.add_doctor("Dr. Amina", "Cardiology").unwrap();
    let doctors = gateway.list_doctors().unwrap();

    assert_eq!(
        doctors,
        vec![Doctor {
            id: 1,
            name: "Dr. Amina".to_string(),
            specialization: "Cardiology".to_string(),
        }]
    );
    assert_eq!(created, doctors[0]);
}

#[test]
fn patients_get_sequential_identities() {
    let gateway = StorageGateway::open_in_memory().unwrap();

    gateway.add_patient("Omar", "34").unwrap();
    gateway.add_patient("Lina", "29").unwrap();

    let patients = gateway.list_patients().unwrap();
    assert_eq!(
        patients,
        vec![
            Patient {
                id: 1,
                name: "Omar".to_string(),
                age: 34,
            },
            Patient {
                id: 2,
                name: "Lina".to_string(),
                age: 29,
            },
        ]
    );
}

#[test]
fn identities_are_unique_across_many_inserts() {
    let gateway = StorageGateway::open_in_memory().unwrap();
    let specialties = ["Cardiology", "Neurology", "Pediatrics", "Oncology"];

    for (index, specialty) in specialties.iter().cycle().take(20).enumerate() {
        let doctor = gateway
            .add_doctor(&format!("Doctor {index}"), specialty)
            .unwrap();
        assert_eq!(doctor.specialization, *specialty);
    }

    let doctors = gateway.list_doctors().unwrap();
    let ids = doctors.iter().map(|doctor| doctor.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), 20);
    assert!(doctors.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[test]
fn non_numeric_age_is_invalid_argument_and_writes_nothing() {
    let gateway = StorageGateway::open_in_memory().unwrap();

    let err = gateway.add_patient("Omar", "thirty-four").unwrap_err();
    assert!(matches!(err, GatewayError::InvalidArgument(_)), "{err}");
    assert!(gateway.list_patients().unwrap().is_empty());
}

#[test]
fn blank_required_field_is_constraint_error() {
    let gateway = StorageGateway::open_in_memory().unwrap();

    let err = gateway.add_doctor("Dr. Amina", "   ").unwrap_err();
    assert!(matches!(err, GatewayError::Constraint(_)), "{err}");
    assert!(gateway.list_doctors().unwrap().is_empty());
}

#[test]
fn appointment_with_unknown_references_is_not_found() {
    let gateway = StorageGateway::open_in_memory().unwrap();

    let err = gateway.add_appointment(1, 1, "2024-05-01").unwrap_err();
    assert!(matches!(
        err,
        GatewayError::NotFound {
            kind: RecordKind::Patient,
            id: 1
        }
    ));

    gateway.add_patient("Omar", "34").unwrap();
    let err = gateway.add_appointment(1, 7, "2024-05-01").unwrap_err();
    assert!(matches!(
        err,
        GatewayError::NotFound {
            kind: RecordKind::Doctor,
            id: 7
        }
    ));
    assert!(gateway.list_appointments().unwrap().is_empty());
}

#[test]
fn appointment_between_existing_records_is_listed() {
    let gateway = StorageGateway::open_in_memory().unwrap();
    let patient = gateway.add_patient("Omar", "34").unwrap();
    let doctor = gateway.add_doctor("Dr. Amina", "Cardiology").unwrap();

    let appointment = gateway
        .add_appointment(patient.id, doctor.id, " 2024-05-01 ")
        .unwrap();

    assert_eq!(appointment.date, "2024-05-01");
    assert_eq!(gateway.list_appointments().unwrap(), vec![appointment]);
}

#[test]
fn malformed_date_is_invalid_argument() {
    let gateway = StorageGateway::open_in_memory().unwrap();
    gateway.add_patient("Omar", "34").unwrap();
    gateway.add_doctor("Dr. Amina", "Cardiology").unwrap();

    let err = gateway.add_appointment(1, 1, "next tuesday").unwrap_err();
    assert!(matches!(err, GatewayError::InvalidArgument(_)), "{err}");
}

#[test]
fn initialize_twice_keeps_data() {
    let mut gateway = StorageGateway::open_in_memory().unwrap();
    gateway.add_doctor("Dr. Amina", "Cardiology").unwrap();

    gateway.initialize().unwrap();
    gateway.initialize().unwrap();

    assert_eq!(gateway.list_doctors().unwrap().len(), 1);
}

#[test]
fn close_is_idempotent_and_blocks_further_calls() {
    let mut gateway = StorageGateway::open_in_memory().unwrap();

    gateway.close().unwrap();
    gateway.close().unwrap();

    assert!(gateway.is_closed());
    assert!(matches!(gateway.list_doctors(), Err(GatewayError::Closed)));
    assert!(matches!(
        gateway.add_doctor("Dr. Amina", "Cardiology"),
        Err(GatewayError::Closed)
    ));
    assert!(matches!(gateway.initialize(), Err(GatewayError::Closed)));
}

#[test]
fn records_survive_reopen_and_identities_continue() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hospital.db");

    let mut first = StorageGateway::open(&path).unwrap();
    first.add_doctor("Dr. Amina", "Cardiology").unwrap();
    first.close().unwrap();

    let second = StorageGateway::open(&path).unwrap();
    let next = second.add_doctor("Dr. Karim", "Neurology").unwrap();

    assert_eq!(next.id, 2);
    assert_eq!(second.list_doctors().unwrap().len(), 2);
}

#[test]
fn text_age_left_by_older_build_is_reported_as_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hospital.db");

    let gateway = StorageGateway::open(&path).unwrap();
    drop(gateway);
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO patients (name, age) VALUES ('Omar', 'unknown');",
        [],
    )
    .unwrap();
    drop(conn);

    let gateway = StorageGateway::open(&path).unwrap();
    let err = gateway.list_patients().unwrap_err();
    assert!(matches!(err, GatewayError::InvalidData(_)), "{err}");
}

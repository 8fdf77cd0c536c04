//! Read-only tabular views of stored records.

use crate::model::appointment::Appointment;
use crate::model::doctor::Doctor;
use crate::model::patient::Patient;

/// Rows rendered as text under fixed column headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn doctors(doctors: &[Doctor]) -> Self {
        Self {
            title: "Doctors",
            columns: &["ID", "Name", "Specialization"],
            rows: doctors
                .iter()
                .map(|doctor| {
                    vec![
                        doctor.id.to_string(),
                        doctor.name.clone(),
                        doctor.specialization.clone(),
                    ]
                })
                .collect(),
        }
    }

    pub fn patients(patients: &[Patient]) -> Self {
        Self {
            title: "Patients",
            columns: &["ID", "Name", "Age"],
            rows: patients
                .iter()
                .map(|patient| {
                    vec![
                        patient.id.to_string(),
                        patient.name.clone(),
                        patient.age.to_string(),
                    ]
                })
                .collect(),
        }
    }

    pub fn appointments(appointments: &[Appointment]) -> Self {
        Self {
            title: "Appointments",
            columns: &["ID", "Patient ID", "Doctor ID", "Date"],
            rows: appointments
                .iter()
                .map(|appointment| {
                    vec![
                        appointment.id.to_string(),
                        appointment.patient_id.to_string(),
                        appointment.doctor_id.to_string(),
                        appointment.date.clone(),
                    ]
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

//! `hospital export`: one table as pretty JSON.

use anyhow::Result;
use clap::ValueEnum;
use hospital_core::StorageGateway;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTable {
    Doctors,
    Patients,
    Appointments,
}

pub fn export_table(
    gateway: &StorageGateway,
    table: ExportTable,
    out: &mut impl Write,
) -> Result<()> {
    match table {
        ExportTable::Doctors => write_json(out, &gateway.list_doctors()?),
        ExportTable::Patients => write_json(out, &gateway.list_patients()?),
        ExportTable::Appointments => write_json(out, &gateway.list_appointments()?),
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, rows: &[T]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{export_table, ExportTable};
    use hospital_core::StorageGateway;

    #[test]
    fn exports_rows_in_identity_order() {
        let gateway = StorageGateway::open_in_memory().unwrap();
        gateway.add_patient("Omar", "34").unwrap();
        gateway.add_patient("Lina", "29").unwrap();

        let mut out = Vec::new();
        export_table(&gateway, ExportTable::Patients, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["name"], "Omar");
        assert_eq!(json[1]["age"], 29);
    }

    #[test]
    fn empty_table_exports_empty_array() {
        let gateway = StorageGateway::open_in_memory().unwrap();

        let mut out = Vec::new();
        export_table(&gateway, ExportTable::Appointments, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}

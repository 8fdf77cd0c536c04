//! Desk record models: doctors, patients and appointments.
//!
//! # Responsibility
//! - Define the persisted record shapes and their insert payloads.
//! - Validate insert payloads before they reach SQL.
//!
//! # Invariants
//! - Every persisted record carries a store-assigned `RecordId`.
//! - Identities are never reused, even after restarts.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod validation;

/// Store-assigned integer identity (`INTEGER PRIMARY KEY AUTOINCREMENT`).
pub type RecordId = i64;

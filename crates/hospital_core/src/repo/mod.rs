//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for doctors, patients and appointments.
//! - Isolate SQLite query details from the gateway.
//!
//! # Invariants
//! - Repository writes call the payload `validate()` before SQL mutations.
//! - Store-level constraint failures surface as `RepoError::Constraint`.

pub mod record_repo;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into desk-level operations.
//! - Keep the interaction layer decoupled from storage details.

pub mod gateway;

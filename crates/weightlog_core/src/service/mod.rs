//! Core use-case services.
//!
//! # Responsibility
//! - Hold the record sequence for an application shell.
//! - Orchestrate import, manual entry and derivations into use-case APIs.
//! - Keep UI/FFI layers decoupled from parsing and derivation details.

pub mod log_service;

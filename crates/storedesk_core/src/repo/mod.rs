//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the generic record accessor contract shared by all registry
//!   tables.
//! - Isolate SQLite query details from the console frontend.
//!
//! # Invariants
//! - Write paths validate value shape against the registry before SQL.
//! - SQL text interpolates identifiers from the registry only; operator
//!   input is always bound as a value parameter.

pub mod record_repo;

//! Core domain logic for Storedesk, a console record manager over SQLite.
//! This crate owns the schema registry, the generic record accessor, and
//! every business invariant; frontends stay I/O glue.

pub mod db;
pub mod input;
pub mod logging;
pub mod model;
pub mod registry;
pub mod repo;

pub use input::{parse_field, parse_record_id, InputError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{FieldValue, Record, RecordId};
pub use registry::{FieldDef, FieldKind, Table};
pub use repo::record_repo::{RecordRepository, RepoError, RepoResult, SqliteRecordRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

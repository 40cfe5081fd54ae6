//! Pure validation for operator-typed field and identifier input.
//!
//! # Responsibility
//! - Turn raw prompt text into typed values, without doing any I/O.
//!
//! # Invariants
//! - Numeric fields must parse as `f64`; text fields must be non-empty after
//!   trimming. Accepted text keeps the raw (untrimmed) input.
//! - Callers own the retry policy; these functions return one verdict per
//!   call.

use crate::model::record::{FieldValue, RecordId};
use crate::registry::{FieldDef, FieldKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection verdict for a single piece of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidNumber { field: &'static str, raw: String },
    EmptyText { field: &'static str },
    InvalidId { raw: String },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { field, raw } => {
                write!(f, "invalid number `{raw}` for field `{field}`")
            }
            Self::EmptyText { field } => write!(f, "field `{field}` cannot be empty"),
            Self::InvalidId { raw } => write!(f, "invalid record id `{raw}`"),
        }
    }
}

impl Error for InputError {}

/// Validates one field's raw input against its registry definition.
pub fn parse_field(def: &FieldDef, raw: &str) -> Result<FieldValue, InputError> {
    match def.kind {
        FieldKind::Real => raw
            .trim()
            .parse::<f64>()
            .map(FieldValue::Real)
            .map_err(|_| InputError::InvalidNumber {
                field: def.name,
                raw: raw.trim().to_string(),
            }),
        FieldKind::Text => {
            if raw.trim().is_empty() {
                Err(InputError::EmptyText { field: def.name })
            } else {
                Ok(FieldValue::Text(raw.to_string()))
            }
        }
    }
}

/// Validates a target identifier for update/delete.
pub fn parse_record_id(raw: &str) -> Result<RecordId, InputError> {
    raw.trim()
        .parse::<RecordId>()
        .map_err(|_| InputError::InvalidId {
            raw: raw.trim().to_string(),
        })
}

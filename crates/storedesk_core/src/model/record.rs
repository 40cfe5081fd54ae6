//! Record shape shared by every registry table.

use crate::registry::FieldKind;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable row identifier assigned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;

/// One editable column value.
///
/// Serialized untagged so a record exports as plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Real(f64),
}

impl FieldValue {
    /// Convenience constructor for text values.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Convenience constructor for numeric values.
    pub fn real(value: f64) -> Self {
        Self::Real(value)
    }

    /// Reports the registry kind this value satisfies.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Real(_) => FieldKind::Real,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}

/// One row of a registry table.
///
/// `values` are positional: index `n` corresponds to field `n` of the owning
/// table's registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub values: Vec<FieldValue>,
}

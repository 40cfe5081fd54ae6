//! Fixed table registry.
//!
//! # Responsibility
//! - Define the closed set of managed tables and their editable fields.
//! - Act as the only source of table/column identifiers used in SQL text.
//!
//! # Invariants
//! - Field order is fixed per table and drives both prompt order and column
//!   order in rendered output.
//! - The implicit `id` column is never listed as an editable field.
//! - SQL statements interpolate names from this registry only; operator input
//!   is always bound as a value parameter.

use serde::{Deserialize, Serialize};

/// Closed set of tables managed by the record accessor.
///
/// Referencing a table outside this set is impossible by construction, which
/// is the whole point of keeping it a fieldless enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Items,
    Employees,
}

/// Value shape of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, required non-empty on input.
    Text,
    /// Floating-point number stored as SQLite REAL.
    Real,
}

impl FieldKind {
    /// Short label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Real => "real",
        }
    }
}

/// One editable column of a registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

const ITEM_FIELDS: [FieldDef; 3] = [
    FieldDef {
        name: "name",
        kind: FieldKind::Text,
    },
    FieldDef {
        name: "category",
        kind: FieldKind::Text,
    },
    FieldDef {
        name: "price",
        kind: FieldKind::Real,
    },
];

const EMPLOYEE_FIELDS: [FieldDef; 3] = [
    FieldDef {
        name: "name",
        kind: FieldKind::Text,
    },
    FieldDef {
        name: "post",
        kind: FieldKind::Text,
    },
    FieldDef {
        name: "salary",
        kind: FieldKind::Real,
    },
];

impl Table {
    /// Every registered table, in menu order.
    pub const ALL: [Table; 2] = [Table::Items, Table::Employees];

    /// SQL table name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Employees => "employees",
        }
    }

    /// Singular label used in operator prompts.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Items => "item",
            Self::Employees => "employee",
        }
    }

    /// Ordered editable fields, identifier excluded.
    pub fn fields(self) -> &'static [FieldDef] {
        match self {
            Self::Items => &ITEM_FIELDS,
            Self::Employees => &EMPLOYEE_FIELDS,
        }
    }

    /// The field substring search runs against.
    ///
    /// Search is deliberately hard-coded to the first field of each table.
    pub fn search_field(self) -> &'static FieldDef {
        &self.fields()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldKind, Table};

    #[test]
    fn field_order_is_stable() {
        let names: Vec<&str> = Table::Items.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "category", "price"]);

        let names: Vec<&str> = Table::Employees.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "post", "salary"]);
    }

    #[test]
    fn numeric_fields_are_real_kind() {
        assert_eq!(Table::Items.fields()[2].kind, FieldKind::Real);
        assert_eq!(Table::Employees.fields()[2].kind, FieldKind::Real);
    }

    #[test]
    fn search_field_is_name_for_both_tables() {
        for table in Table::ALL {
            assert_eq!(table.search_field().name, "name");
        }
    }
}

//! Generic record accessor contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD operations parameterized by registry table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert`/`update` reject value slices whose arity or kinds disagree
//!   with the registry before any SQL runs.
//! - `update`/`delete` against a missing identifier affect zero rows and
//!   return `Ok(0)`; detecting that condition is the caller's choice.
//! - Read paths reject malformed persisted state instead of masking it.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::record::{FieldValue, Record, RecordId};
use crate::registry::{FieldKind, Table};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection has not been migrated to the schema this binary expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Value slice arity disagrees with the registry.
    FieldCountMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Value at a field position has the wrong kind.
    FieldKindMismatch {
        table: &'static str,
        field: &'static str,
        expected: FieldKind,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{column}` is missing from table `{table}`")
            }
            Self::FieldCountMismatch {
                table,
                expected,
                actual,
            } => write!(
                f,
                "table `{table}` takes {expected} field values, got {actual}"
            ),
            Self::FieldKindMismatch {
                table,
                field,
                expected,
            } => write!(
                f,
                "field `{field}` of table `{table}` takes a {} value",
                expected.label()
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Generic accessor interface over registry tables.
pub trait RecordRepository {
    /// Inserts one row and returns its fresh identifier.
    fn insert(&self, table: Table, values: &[FieldValue]) -> RepoResult<RecordId>;

    /// Returns every row of `table` in identifier order.
    fn list(&self, table: Table) -> RepoResult<Vec<Record>>;

    /// Returns rows whose first registry field contains `needle`.
    ///
    /// An empty needle matches every row. SQLite `LIKE` semantics apply, so
    /// ASCII matching is case-insensitive and `%`/`_` act as wildcards.
    fn search(&self, table: Table, needle: &str) -> RepoResult<Vec<Record>>;

    /// Overwrites every registry field of the matching row, preserving its
    /// identifier. Returns the affected-row count; a missing identifier
    /// yields `Ok(0)`.
    fn update(&self, table: Table, id: RecordId, values: &[FieldValue]) -> RepoResult<usize>;

    /// Removes the matching row. Returns the affected-row count; a missing
    /// identifier yields `Ok(0)`.
    fn delete(&self, table: Table, id: RecordId) -> RepoResult<usize>;
}

/// SQLite-backed record repository.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    /// Builds a repository after verifying the connection schema is ready.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` disagrees with
    ///   the latest migration.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when a registry
    ///   table is absent or structurally incomplete.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        for table in Table::ALL {
            let columns = existing_columns(conn, table)?;
            if columns.is_empty() {
                return Err(RepoError::MissingRequiredTable(table.name()));
            }
            let required = std::iter::once("id").chain(table.fields().iter().map(|f| f.name));
            for column in required {
                if !columns.iter().any(|existing| existing == column) {
                    return Err(RepoError::MissingRequiredColumn {
                        table: table.name(),
                        column,
                    });
                }
            }
        }

        Ok(Self { conn })
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn insert(&self, table: Table, values: &[FieldValue]) -> RepoResult<RecordId> {
        validate_values(table, values)?;

        let fields = table.fields();
        let columns = fields.iter().map(|f| f.name).collect::<Vec<_>>().join(", ");
        let placeholders = (1..=fields.len())
            .map(|n| format!("?{n}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({columns}) VALUES ({placeholders});",
            table.name()
        );

        self.conn
            .execute(&sql, params_from_iter(values.iter().map(bind_value)))?;
        let id = self.conn.last_insert_rowid();
        debug!(
            "event=record_insert module=repo table={} id={id}",
            table.name()
        );
        Ok(id)
    }

    fn list(&self, table: Table) -> RepoResult<Vec<Record>> {
        let sql = format!("{} ORDER BY id;", select_sql(table));
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_record_row(table, row)?);
        }
        Ok(records)
    }

    fn search(&self, table: Table, needle: &str) -> RepoResult<Vec<Record>> {
        let sql = format!(
            "{} WHERE {} LIKE ?1 ORDER BY id;",
            select_sql(table),
            table.search_field().name
        );
        let pattern = format!("%{needle}%");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![pattern])?;

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_record_row(table, row)?);
        }
        Ok(records)
    }

    fn update(&self, table: Table, id: RecordId, values: &[FieldValue]) -> RepoResult<usize> {
        validate_values(table, values)?;

        let fields = table.fields();
        let assignments = fields
            .iter()
            .enumerate()
            .map(|(index, field)| format!("{} = ?{}", field.name, index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {assignments} WHERE id = ?{};",
            table.name(),
            fields.len() + 1
        );

        let mut bind_values: Vec<Value> = values.iter().map(bind_value).collect();
        bind_values.push(Value::Integer(id));
        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        debug!(
            "event=record_update module=repo table={} id={id} changed={changed}",
            table.name()
        );
        Ok(changed)
    }

    fn delete(&self, table: Table, id: RecordId) -> RepoResult<usize> {
        let sql = format!("DELETE FROM {} WHERE id = ?1;", table.name());
        let changed = self.conn.execute(&sql, params![id])?;
        debug!(
            "event=record_delete module=repo table={} id={id} changed={changed}",
            table.name()
        );
        Ok(changed)
    }
}

fn select_sql(table: Table) -> String {
    let columns = table
        .fields()
        .iter()
        .map(|f| f.name)
        .collect::<Vec<_>>()
        .join(", ");
    format!("SELECT id, {columns} FROM {}", table.name())
}

fn validate_values(table: Table, values: &[FieldValue]) -> RepoResult<()> {
    let fields = table.fields();
    if values.len() != fields.len() {
        return Err(RepoError::FieldCountMismatch {
            table: table.name(),
            expected: fields.len(),
            actual: values.len(),
        });
    }

    for (field, value) in fields.iter().zip(values) {
        if value.kind() != field.kind {
            return Err(RepoError::FieldKindMismatch {
                table: table.name(),
                field: field.name,
                expected: field.kind,
            });
        }
    }

    Ok(())
}

fn bind_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => Value::Text(text.clone()),
        FieldValue::Real(real) => Value::Real(*real),
    }
}

fn parse_record_row(table: Table, row: &Row<'_>) -> RepoResult<Record> {
    let id: RecordId = row.get(0)?;
    let mut values = Vec::with_capacity(table.fields().len());

    for (index, field) in table.fields().iter().enumerate() {
        let column = index + 1;
        let value = match field.kind {
            FieldKind::Text => match row.get::<_, Option<String>>(column)? {
                Some(text) => FieldValue::Text(text),
                None => return Err(null_field_error(table, field.name)),
            },
            FieldKind::Real => match row.get::<_, Option<f64>>(column)? {
                Some(real) => FieldValue::Real(real),
                None => return Err(null_field_error(table, field.name)),
            },
        };
        values.push(value);
    }

    Ok(Record { id, values })
}

fn null_field_error(table: Table, field: &str) -> RepoError {
    RepoError::InvalidData(format!("null value in {}.{field}", table.name()))
}

fn existing_columns(conn: &Connection, table: Table) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let mut rows = stmt.query(params![table.name()])?;

    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>(0)?);
    }
    Ok(columns)
}

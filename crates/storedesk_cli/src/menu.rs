//! Nested operator menus and their record operations.
//!
//! # Responsibility
//! - Drive the top-level and per-table menu loops.
//! - Wire operator choices to the generic record accessor.
//!
//! # Invariants
//! - Unrecognized choices re-prompt with an error message.
//! - Update/delete re-display current rows before asking for a target
//!   identifier.
//! - End of input behaves like back/exit at every prompt.

use crate::prompt::Console;
use crate::render::render_table;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use storedesk_core::{RecordRepository, RepoError, Table};

/// Fatal error surfaced out of the menu loop.
///
/// Recoverable conditions (bad input, no matching rows) are handled at the
/// prompt; only console and storage failures propagate.
#[derive(Debug)]
pub enum MenuError {
    Io(io::Error),
    Repo(RepoError),
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console I/O error: {err}"),
            Self::Repo(err) => write!(f, "storage error: {err}"),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for MenuError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Runs the top-level menu until the operator exits or input ends.
pub fn run_main_menu<R, W, P>(console: &mut Console<R, W>, repo: &P) -> Result<(), MenuError>
where
    R: BufRead,
    W: Write,
    P: RecordRepository,
{
    loop {
        console.say("\n==============================================")?;
        console.say("           STOREDESK RECORD MANAGER")?;
        console.say("==============================================")?;
        console.say("1. Manage Items")?;
        console.say("2. Manage Employees")?;
        console.say("3. Exit")?;

        let Some(choice) = console.prompt("Enter your choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => run_table_menu(console, repo, Table::Items)?,
            "2" => run_table_menu(console, repo, Table::Employees)?,
            "3" => {
                console.say(" Exiting... Goodbye!")?;
                break;
            }
            _ => console.say(" Invalid choice!")?,
        }
    }
    Ok(())
}

fn run_table_menu<R, W, P>(
    console: &mut Console<R, W>,
    repo: &P,
    table: Table,
) -> Result<(), MenuError>
where
    R: BufRead,
    W: Write,
    P: RecordRepository,
{
    loop {
        console.say(&format!(
            "\n------ {} MENU ------",
            table.name().to_uppercase()
        ))?;
        console.say("1. Add")?;
        console.say("2. View")?;
        console.say("3. Search")?;
        console.say("4. Update")?;
        console.say("5. Delete")?;
        console.say("6. Back")?;

        let Some(choice) = console.prompt("Enter choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => add_record(console, repo, table)?,
            "2" => view_records(console, repo, table)?,
            "3" => search_records(console, repo, table)?,
            "4" => update_record(console, repo, table)?,
            "5" => delete_record(console, repo, table)?,
            "6" => break,
            _ => console.say(" Invalid choice!")?,
        }
    }
    Ok(())
}

fn add_record<R, W, P>(
    console: &mut Console<R, W>,
    repo: &P,
    table: Table,
) -> Result<(), MenuError>
where
    R: BufRead,
    W: Write,
    P: RecordRepository,
{
    let Some(values) = console.collect_fields(table)? else {
        return Ok(());
    };
    repo.insert(table, &values)?;
    console.say(" Record added successfully!")?;
    Ok(())
}

fn view_records<R, W, P>(
    console: &mut Console<R, W>,
    repo: &P,
    table: Table,
) -> Result<(), MenuError>
where
    R: BufRead,
    W: Write,
    P: RecordRepository,
{
    let rows = repo.list(table)?;
    if rows.is_empty() {
        console.say(&format!(" No records found in {}.", table.name()))?;
    } else {
        render_table(console.output_mut(), table, &rows)?;
    }
    Ok(())
}

fn search_records<R, W, P>(
    console: &mut Console<R, W>,
    repo: &P,
    table: Table,
) -> Result<(), MenuError>
where
    R: BufRead,
    W: Write,
    P: RecordRepository,
{
    let field = table.search_field().name;
    let Some(needle) = console.prompt(&format!("Enter {field} to search: "))? else {
        return Ok(());
    };
    let rows = repo.search(table, &needle)?;
    if rows.is_empty() {
        console.say(" Record not found.")?;
    } else {
        render_table(console.output_mut(), table, &rows)?;
    }
    Ok(())
}

fn update_record<R, W, P>(
    console: &mut Console<R, W>,
    repo: &P,
    table: Table,
) -> Result<(), MenuError>
where
    R: BufRead,
    W: Write,
    P: RecordRepository,
{
    view_records(console, repo, table)?;
    let Some(id) = console.prompt_record_id(table, "update")? else {
        return Ok(());
    };
    let Some(values) = console.collect_fields(table)? else {
        return Ok(());
    };
    // A missing identifier changes zero rows; that outcome is deliberately
    // not reported.
    repo.update(table, id, &values)?;
    console.say(" Record updated successfully!")?;
    Ok(())
}

fn delete_record<R, W, P>(
    console: &mut Console<R, W>,
    repo: &P,
    table: Table,
) -> Result<(), MenuError>
where
    R: BufRead,
    W: Write,
    P: RecordRepository,
{
    view_records(console, repo, table)?;
    let Some(id) = console.prompt_record_id(table, "delete")? else {
        return Ok(());
    };
    repo.delete(table, id)?;
    console.say(" Record deleted successfully!")?;
    Ok(())
}

//! Line-oriented prompt/response plumbing.
//!
//! # Responsibility
//! - Read operator input and run the re-prompt loops for field collection
//!   and identifier targeting.
//!
//! # Invariants
//! - Field collection re-prompts indefinitely until input validates; there
//!   is no cancel path other than end of input.
//! - Identifier parse failure aborts the single operation, it never loops.

use std::io::{self, BufRead, Write};
use storedesk_core::{parse_field, parse_record_id, FieldValue, InputError, RecordId, Table};

/// Operator console bound to a line reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the writer, for output inspection.
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `text` and reads one line. Returns `None` on end of input.
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Collects one value per registry field, re-prompting until each
    /// validates. Returns `None` when input ends mid-collection.
    pub fn collect_fields(&mut self, table: Table) -> io::Result<Option<Vec<FieldValue>>> {
        let mut values = Vec::with_capacity(table.fields().len());
        for field in table.fields() {
            loop {
                let Some(raw) = self.prompt(&format!("Enter {}: ", field.name))? else {
                    return Ok(None);
                };
                match parse_field(field, &raw) {
                    Ok(value) => {
                        values.push(value);
                        break;
                    }
                    Err(InputError::InvalidNumber { .. }) => {
                        self.say(" Invalid number. Try again.")?;
                    }
                    Err(_) => {
                        self.say(" Cannot be empty.")?;
                    }
                }
            }
        }
        Ok(Some(values))
    }

    /// Asks for a target identifier. Returns `None` on end of input or on a
    /// malformed identifier, after reporting the latter.
    pub fn prompt_record_id(&mut self, table: Table, verb: &str) -> io::Result<Option<RecordId>> {
        let Some(raw) = self.prompt(&format!("Enter {} ID to {verb}: ", table.singular()))? else {
            return Ok(None);
        };
        match parse_record_id(&raw) {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.say(" Invalid ID!")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Console;
    use std::io::Cursor;
    use storedesk_core::{FieldValue, Table};

    fn console(script: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(script.to_string()), Vec::new())
    }

    #[test]
    fn prompt_strips_line_endings() {
        let mut console = console("Milk\r\n");
        let line = console.prompt("Enter name: ").unwrap();
        assert_eq!(line.as_deref(), Some("Milk"));
    }

    #[test]
    fn prompt_reports_end_of_input() {
        let mut console = console("");
        assert_eq!(console.prompt("Enter name: ").unwrap(), None);
    }

    #[test]
    fn collect_fields_reprompts_until_valid() {
        let mut console = console("Milk\nDairy\nabc\n2.5\n");
        let values = console.collect_fields(Table::Items).unwrap().unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::text("Milk"),
                FieldValue::text("Dairy"),
                FieldValue::real(2.5),
            ]
        );

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Invalid number"));
    }

    #[test]
    fn collect_fields_rejects_blank_text() {
        let mut console = console("\nAnn\nClerk\n1200\n");
        let values = console.collect_fields(Table::Employees).unwrap().unwrap();
        assert_eq!(values[0], FieldValue::text("Ann"));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Cannot be empty"));
    }

    #[test]
    fn record_id_prompt_aborts_on_bad_input() {
        let mut console = console("xyz\n");
        assert_eq!(console.prompt_record_id(Table::Items, "update").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Invalid ID!"));
    }

    #[test]
    fn record_id_prompt_parses_integer() {
        let mut console = console(" 7 \n");
        assert_eq!(
            console.prompt_record_id(Table::Items, "delete").unwrap(),
            Some(7)
        );
    }
}

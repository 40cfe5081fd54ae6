//! ASCII table rendering for record listings.
//!
//! Plain `+---+` grid with content-fitted column widths; one header row of
//! `ID` plus the table's registry field names, then one line per record.

use std::io::{self, Write};
use storedesk_core::{Record, Table};

// Cap keeps a single runaway value from blowing up every row.
const MAX_CELL_WIDTH: usize = 80;

/// Renders `rows` of `table` as an ASCII grid.
pub fn render_table(out: &mut impl Write, table: Table, rows: &[Record]) -> io::Result<()> {
    let mut headers = vec!["ID".to_string()];
    headers.extend(table.fields().iter().map(|field| field.name.to_string()));

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|record| {
            let mut cells = vec![record.id.to_string()];
            cells.extend(record.values.iter().map(|value| value.to_string()));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = headers
        .iter()
        .map(|header| display_width(header).min(MAX_CELL_WIDTH))
        .collect();
    for row in &body {
        for (index, cell) in row.iter().enumerate().take(widths.len()) {
            widths[index] = widths[index].max(display_width(cell).min(MAX_CELL_WIDTH));
        }
    }

    let separator = build_separator(&widths);
    writeln!(out, "{separator}")?;
    writeln!(out, "{}", build_row(&headers, &widths))?;
    writeln!(out, "{separator}")?;
    for row in &body {
        writeln!(out, "{}", build_row(row, &widths))?;
    }
    writeln!(out, "{separator}")?;
    Ok(())
}

fn build_separator(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let width = *width;
        // Widths, truncation, and padding all count chars so multibyte text
        // stays aligned and never splits mid-character.
        let text = if display_width(cell) > width {
            let mut truncated: String = cell.chars().take(width.saturating_sub(3)).collect();
            truncated.push_str("...");
            truncated
        } else {
            cell.clone()
        };
        line.push_str(&format!(" {text:<width$} |"));
    }
    line
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use storedesk_core::{FieldValue, Record, Table};

    fn milk_row() -> Record {
        Record {
            id: 1,
            values: vec![
                FieldValue::text("Milk"),
                FieldValue::text("Dairy"),
                FieldValue::real(2.5),
            ],
        }
    }

    #[test]
    fn header_lists_id_then_registry_fields() {
        let mut out = Vec::new();
        render_table(&mut out, Table::Items, &[milk_row()]).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        let header = rendered.lines().nth(1).unwrap();
        assert!(header.contains("ID"));
        let name_at = header.find("name").unwrap();
        let category_at = header.find("category").unwrap();
        let price_at = header.find("price").unwrap();
        assert!(name_at < category_at && category_at < price_at);
    }

    #[test]
    fn grid_has_separators_and_one_line_per_record() {
        let mut out = Vec::new();
        render_table(&mut out, Table::Items, &[milk_row()]).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = rendered.lines().collect();
        // separator, header, separator, row, separator
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('+') && lines[0].ends_with('+'));
        assert!(lines[3].contains("| Milk"));
        assert!(lines[3].contains("2.5"));
    }

    #[test]
    fn multibyte_text_below_the_cap_renders_whole_and_aligned() {
        // 45 chars but 90 bytes; must not be treated as over the cap.
        let name = "é".repeat(45);
        let row = Record {
            id: 1,
            values: vec![
                FieldValue::text(name.clone()),
                FieldValue::text("Misc"),
                FieldValue::real(1.0),
            ],
        };
        let mut out = Vec::new();
        render_table(&mut out, Table::Items, &[row]).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains(&name));
        let widths: Vec<usize> = rendered.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn overlong_multibyte_cell_truncates_on_a_char_boundary() {
        let name = "é".repeat(100);
        let row = Record {
            id: 1,
            values: vec![
                FieldValue::text(name),
                FieldValue::text("Misc"),
                FieldValue::real(1.0),
            ],
        };
        let mut out = Vec::new();
        render_table(&mut out, Table::Items, &[row]).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains("..."));
        let widths: Vec<usize> = rendered.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn columns_widen_to_fit_content() {
        let wide = Record {
            id: 2,
            values: vec![
                FieldValue::text("Extra Long Product Name"),
                FieldValue::text("Misc"),
                FieldValue::real(1.0),
            ],
        };
        let mut out = Vec::new();
        render_table(&mut out, Table::Items, &[milk_row(), wide]).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains("Extra Long Product Name"));
        // Every line of the grid has equal width.
        let lens: Vec<usize> = rendered.lines().map(str::len).collect();
        assert!(lens.windows(2).all(|pair| pair[0] == pair[1]));
    }
}

//! Framed text table with multi-line cells.

use std::fmt;

use crate::trains::ParsedTrainRow;

use super::cell::{two_tone_cell, visible_width};

/// Column headers of the train table.
pub const HEADERS: [&str; 11] = [
    "车次", "车站", "时间", "历时", "一等座", "二等座", "软卧", "硬卧", "软座", "硬座", "无座",
];

/// A table of text cells.
///
/// Cells may span several lines (split on `\n`); each row is as tall as its
/// tallest cell. Cells are centered in their column. Rules are drawn above
/// and below the header and under the last row.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render empty; extra cells are dropped.
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| cell_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell_width(cell));
            }
        }
        widths
    }
}

fn cell_width(cell: &str) -> usize {
    cell.split('\n').map(visible_width).max().unwrap_or(0)
}

fn write_rule(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    f.write_str("+")?;
    for width in widths {
        write!(f, "{}+", "-".repeat(width + 2))?;
    }
    f.write_str("\n")
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    let lines: Vec<Vec<&str>> = (0..widths.len())
        .map(|i| cells.get(i).map_or_else(Vec::new, |c| c.split('\n').collect()))
        .collect();
    let height = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for line_no in 0..height {
        f.write_str("|")?;
        for (width, cell_lines) in widths.iter().zip(&lines) {
            let text = cell_lines.get(line_no).copied().unwrap_or("");
            let pad = width - visible_width(text);
            let left = pad / 2;
            write!(
                f,
                " {}{}{} |",
                " ".repeat(left),
                text,
                " ".repeat(pad - left)
            )?;
        }
        f.write_str("\n")?;
    }
    Ok(())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        write_rule(f, &widths)?;
        write_row(f, &widths, &self.headers)?;
        write_rule(f, &widths)?;
        for row in &self.rows {
            write_row(f, &widths, row)?;
        }
        write_rule(f, &widths)
    }
}

/// Table cells for one train, in [`HEADERS`] order.
fn train_cells(row: &ParsedTrainRow) -> Vec<String> {
    let seats = &row.seats;
    vec![
        row.train_code.to_string(),
        two_tone_cell(&row.from_station_name, &row.to_station_name),
        two_tone_cell(&row.departure_time, &row.arrival_time),
        row.duration.clone(),
        seats.first_class.clone(),
        seats.second_class.clone(),
        seats.soft_sleeper.clone(),
        seats.hard_sleeper.clone(),
        seats.soft_seat.clone(),
        seats.hard_seat.clone(),
        seats.no_seat.clone(),
    ]
}

/// Render trains as the final table.
pub fn render_trains<'a>(rows: impl IntoIterator<Item = &'a ParsedTrainRow>) -> Table {
    let mut table = Table::new(HEADERS);
    for row in rows {
        table.add_row(train_cells(row));
    }
    table
}

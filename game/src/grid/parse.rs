#[cfg(test)]
use csv::ReaderBuilder;

use crate::direction::Dir4;

use super::{Cell, Grid};

#[cfg(test)]
fn parse_cell(field: &str) -> Option<Cell> {
    let mut cell = Cell::default();
    match field.trim() {
        "." => {}
        codes => {
            for c in codes.chars() {
                let dir = Dir4::ALL.into_iter().find(|d| d.code() == c)?;
                cell.open(dir);
            }
        }
    }
    Some(cell)
}

fn cell_code(cell: Cell) -> String {
    let code: String = cell.open_dirs().map(Dir4::code).collect();
    if code.is_empty() { ".".to_string() } else { code }
}

impl Grid {
    /// Parses a grid where each field lists the open sides of one cell using
    /// `u`, `d`, `l` and `r`, or `.` for a closed cell.
    ///
    /// Returns `None` for ragged rows, unknown codes, or passages that are open
    /// on one side only.
    #[cfg(test)]
    pub(crate) fn from_csv(csv_str: &str) -> Option<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(csv_str.as_bytes());

        let mut cells: Vec<Vec<Cell>> = Vec::new();
        for result in reader.records() {
            let record = warn_err!(result, "Invalid maze CSV: {}")?;
            let row = record.iter().map(parse_cell).collect::<Option<Vec<_>>>()?;
            cells.push(row);
        }

        let width = cells.first().map(Vec::len).filter(|&w| w > 0)?;
        let grid = Grid {
            height: cells.len(),
            width,
            cells,
        };
        if !grid.is_consistent() {
            log::warn!("Maze CSV has one-sided passages");
            return None;
        }
        Some(grid)
    }

    pub(crate) fn to_csv(&self) -> String {
        let mut lines = Vec::new();
        for row in &self.cells {
            let fields: Vec<String> = row.iter().map(|&cell| cell_code(cell)).collect();
            lines.push(fields.join(",") + "\n");
        }
        lines.join("")
    }
}

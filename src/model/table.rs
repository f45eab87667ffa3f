//! Table types.

use super::{plain_text, Inline};
use serde::{Deserialize, Serialize};

/// A table structure.
///
/// The header row is always present; a header with zero cells means there
/// is no table to emit. Body rows are expected to have as many cells as the
/// header, and renderers pad shorter rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header row
    pub header: TableRow,

    /// Body rows
    pub rows: Vec<TableRow>,

    /// Column alignments ("left", "center", "right" or "")
    pub align: Vec<String>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the given header row.
    pub fn with_header(header: TableRow) -> Self {
        Self {
            header,
            ..Self::new()
        }
    }

    /// Add a body row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of columns (based on the header).
    pub fn column_count(&self) -> usize {
        self.header.cells.len()
    }

    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no header cells.
    pub fn is_empty(&self) -> bool {
        self.header.cells.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .map(TableRow::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row of plain text cells.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: texts.into_iter().map(TableCell::text).collect(),
        }
    }

    /// Add a cell to the row.
    pub fn add_cell(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    /// Get plain text of the row (tab-separated).
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(TableCell::plain_text)
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Inline content
    pub content: Vec<Inline>,
}

impl TableCell {
    /// Create a cell from inline content.
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    /// Create a cell holding one text run.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Inline::text(text)])
    }

    /// The text when the cell is exactly one plain text run.
    pub fn as_plain_text(&self) -> Option<&str> {
        match self.content.as_slice() {
            [node] => node.as_text(),
            _ => None,
        }
    }

    /// Get plain text content of the cell.
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }
}

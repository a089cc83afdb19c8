/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Output table model.
//!
//! This module provides:
//! - [`Table`]: A rendered message layout, head section plus body section
//! - [`Row`]: A table row with a CSS class and one or more cells
//! - [`Cell`]: A single cell with its element kind and column span
//! - [`RowClass`]: The closed set of row classes the renderer emits
//!
//! Cell text is stored unescaped. Whatever escaping a concrete output format
//! needs (HTML entities for angle brackets, for instance) is applied by the
//! serializer, never by the renderer.

use serde::{Deserialize, Serialize};

/// Number of columns in a rendered message table.
pub const COLUMNS: u8 = 4;

/// Cell element kind: header cell or body cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellTag {
    /// Header-style cell (`th`).
    Th,
    /// Body cell (`td`).
    Td,
}

impl CellTag {
    /// Returns the HTML element name for this cell kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Th => "th",
            Self::Td => "td",
        }
    }
}

/// CSS class attached to a rendered row.
///
/// The set is closed; adding a row kind is a compile-time-visible change
/// everywhere a class is matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowClass {
    /// Title row naming the message and its msgtype.
    MsgHeader,
    /// Column-label row (Tag, Field Name, Type, Req).
    FieldHeader,
    /// Standard header marker row.
    MessageHeader,
    /// Standard footer marker row.
    MessageFooter,
    /// Component start boundary row.
    ComponentStart,
    /// Component end boundary row.
    ComponentEnd,
    /// Field row.
    Field,
}

impl RowClass {
    /// Returns the CSS class name emitted for this row.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MsgHeader => "fix-table-msg-header",
            Self::FieldHeader => "fix-field-header",
            Self::MessageHeader => "fix-message-header",
            Self::MessageFooter => "fix-message-footer",
            Self::ComponentStart => "fix-component-start",
            Self::ComponentEnd => "fix-component-end",
            Self::Field => "fixField",
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell element kind.
    pub tag: CellTag,
    /// Column span; 1 means no colspan attribute is emitted.
    pub colspan: u8,
    /// Unescaped cell text.
    pub text: String,
}

impl Cell {
    /// Creates a cell spanning a single column.
    ///
    /// # Arguments
    /// * `tag` - The cell element kind
    /// * `text` - The cell text, unescaped
    #[must_use]
    pub fn new(tag: CellTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            colspan: 1,
            text: text.into(),
        }
    }

    /// Creates a cell spanning the given number of columns.
    #[must_use]
    pub fn spanning(tag: CellTag, colspan: u8, text: impl Into<String>) -> Self {
        Self {
            tag,
            colspan,
            text: text.into(),
        }
    }
}

/// A table row: a CSS class plus one or more cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// CSS class applied to the row.
    pub class: RowClass,
    /// Cells in column order.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Creates a row with one cell spanning the full table width.
    ///
    /// The cell tag is configurable so the title row can use header-style
    /// cells while marker rows use body cells.
    #[must_use]
    pub fn full_width(class: RowClass, tag: CellTag, text: impl Into<String>) -> Self {
        Self {
            class,
            cells: vec![Cell::spanning(tag, COLUMNS, text)],
        }
    }

    /// Creates a row of single-column cells with a uniform cell tag.
    #[must_use]
    pub fn cells<I, S>(class: RowClass, tag: CellTag, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            class,
            cells: texts.into_iter().map(|t| Cell::new(tag, t)).collect(),
        }
    }

    /// Creates a component boundary row.
    ///
    /// The text cell spans three columns so a trailing cell can carry the
    /// required flag. This is the only row shape that pairs a wide text cell
    /// with a flag cell; standard header/footer rows carry no flag and field
    /// rows show theirs inline.
    #[must_use]
    pub fn component_boundary(
        class: RowClass,
        text: impl Into<String>,
        required: impl Into<String>,
    ) -> Self {
        Self {
            class,
            cells: vec![
                Cell::spanning(CellTag::Td, COLUMNS - 1, text),
                Cell::new(CellTag::Td, required),
            ],
        }
    }
}

/// A rendered message table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header rows: the title row and the column-label row.
    pub head: Vec<Row>,
    /// Body rows in emission order.
    pub body: Vec<Row>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of body rows carrying the given class.
    #[must_use]
    pub fn count_body_rows(&self, class: RowClass) -> usize {
        self.body.iter().filter(|row| row.class == class).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_class_as_str() {
        assert_eq!(RowClass::MsgHeader.as_str(), "fix-table-msg-header");
        assert_eq!(RowClass::Field.as_str(), "fixField");
        assert_eq!(RowClass::ComponentStart.as_str(), "fix-component-start");
    }

    #[test]
    fn test_full_width_row() {
        let row = Row::full_width(RowClass::MessageHeader, CellTag::Td, "<Standard Header>");
        assert_eq!(row.cells.len(), 1);
        assert_eq!(row.cells[0].colspan, COLUMNS);
        assert_eq!(row.cells[0].tag, CellTag::Td);
        assert_eq!(row.cells[0].text, "<Standard Header>");
    }

    #[test]
    fn test_cells_row() {
        let row = Row::cells(
            RowClass::FieldHeader,
            CellTag::Th,
            ["Tag", "Field Name", "Type", "Req"],
        );
        assert_eq!(row.cells.len(), 4);
        assert!(row.cells.iter().all(|c| c.tag == CellTag::Th));
        assert!(row.cells.iter().all(|c| c.colspan == 1));
        assert_eq!(row.cells[1].text, "Field Name");
    }

    #[test]
    fn test_component_boundary_row() {
        let row = Row::component_boundary(
            RowClass::ComponentStart,
            " Start component <Instrument>",
            "Y",
        );
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[0].colspan, 3);
        assert_eq!(row.cells[1].colspan, 1);
        assert_eq!(row.cells[1].text, "Y");
    }

    #[test]
    fn test_count_body_rows() {
        let mut table = Table::new();
        table
            .body
            .push(Row::full_width(RowClass::MessageHeader, CellTag::Td, "x"));
        table
            .body
            .push(Row::cells(RowClass::Field, CellTag::Td, ["1", "a", "b", "c"]));
        table
            .body
            .push(Row::cells(RowClass::Field, CellTag::Td, ["2", "d", "e", "f"]));
        assert_eq!(table.count_body_rows(RowClass::Field), 2);
        assert_eq!(table.count_body_rows(RowClass::MessageFooter), 0);
    }
}

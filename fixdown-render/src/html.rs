/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! HTML serialization of rendered tables.
//!
//! Produces a `<table>` fragment with a `<thead>` and `<tbody>` section,
//! one `<tr class="...">` per row and `<th>`/`<td>` per cell. Cell text is
//! escaped here, so the angle-bracket glyphs stored in marker and boundary
//! rows come out as `&lt;`/`&gt;` entities.

use fixdown_core::table::{Cell, Row, Table};
use quick_xml::escape::escape;
use std::fmt::Write;

/// Serializes a rendered table as an HTML fragment.
#[must_use]
pub fn to_html(table: &Table) -> String {
    let mut html = String::new();
    html.push_str("<table><thead>");
    for row in &table.head {
        write_row(&mut html, row);
    }
    html.push_str("</thead><tbody>");
    for row in &table.body {
        write_row(&mut html, row);
    }
    html.push_str("</tbody></table>");
    html
}

fn write_row(html: &mut String, row: &Row) {
    write!(html, "<tr class=\"{}\">", row.class.as_str()).unwrap();
    for cell in &row.cells {
        write_cell(html, cell);
    }
    html.push_str("</tr>");
}

fn write_cell(html: &mut String, cell: &Cell) {
    let tag = cell.tag.as_str();
    if cell.colspan > 1 {
        write!(html, "<{} colspan=\"{}\">", tag, cell.colspan).unwrap();
    } else {
        write!(html, "<{tag}>").unwrap();
    }
    write!(html, "{}", escape(cell.text.as_str())).unwrap();
    write!(html, "</{tag}>").unwrap();
}

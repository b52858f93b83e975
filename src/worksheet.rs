//! Worksheet content.
//!
//! A worksheet part is decoded into ordered rows of ordered cells. Cell
//! values are the raw strings from the part: a literal serialization for
//! numbers and inline text, or a shared-string-table index when the cell
//! uses the shared-string variant. No disambiguation is attempted.

use serde::Deserialize;

/// The decoded content of one worksheet part.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename = "worksheet")]
pub struct Worksheet {
    #[serde(rename = "sheetData", default)]
    pub sheet_data: SheetData,
}

impl Worksheet {
    /// The worksheet's rows, in document order.
    pub fn rows(&self) -> &[Row] {
        &self.sheet_data.rows
    }
}

/// The `<sheetData>` container of a worksheet part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SheetData {
    #[serde(rename = "row", default)]
    pub rows: Vec<Row>,
}

/// One row of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Row {
    #[serde(rename = "c", default)]
    pub cells: Vec<Cell>,
}

/// One cell, carrying its raw value string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cell {
    /// Raw `<v>` content; empty when the cell has no value element.
    #[serde(rename = "v", default)]
    pub value: String,
}

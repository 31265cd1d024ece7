//! `formula-model` defines the in-memory spreadsheet structures that border templates are
//! applied to: cell coordinates and ranges, sparse worksheets, and a deduplicated style table.
//!
//! Everything is plain data with `serde` support so it can cross IPC/WASM boundaries.

mod address;
mod cell;
mod style;
mod value;
mod workbook;
mod worksheet;

pub use address::{A1ParseError, CellRef, Range, RangeError, RangeIter, RangeParseError};
pub use cell::{Cell, CellKey, EXCEL_MAX_COLS, EXCEL_MAX_ROWS};
pub use style::{
    Border, BorderEdge, BorderStyle, Font, IndexedColor, Style, StyleError, StyleTable,
};
pub use value::CellValue;
pub use workbook::{Workbook, WorksheetStylesMut};
pub use worksheet::{Worksheet, WorksheetId};

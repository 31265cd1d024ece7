use serde::{Deserialize, Serialize};

use crate::{CellRef, Style, StyleError, StyleTable, Worksheet, WorksheetId};

/// A workbook containing worksheets and the shared style table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: Vec<Worksheet>,

    /// Workbook style table (deduplicated).
    #[serde(default)]
    pub styles: StyleTable,

    #[serde(skip)]
    next_sheet_id: WorksheetId,
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbook {
    pub fn new() -> Self {
        Self {
            sheets: Vec::new(),
            styles: StyleTable::new(),
            next_sheet_id: 1,
        }
    }

    /// Add a worksheet, returning its id.
    pub fn add_sheet(&mut self, name: impl Into<String>) -> WorksheetId {
        let id = self
            .next_sheet_id
            .max(self.sheets.iter().map(|s| s.id + 1).max().unwrap_or(1));
        self.next_sheet_id = id.wrapping_add(1);
        self.sheets.push(Worksheet::new(id, name));
        id
    }

    pub fn sheet(&self, id: WorksheetId) -> Option<&Worksheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn sheet_mut(&mut self, id: WorksheetId) -> Option<&mut Worksheet> {
        self.sheets.iter_mut().find(|s| s.id == id)
    }

    /// Resolve the style of a cell on a sheet.
    pub fn cell_style(&self, id: WorksheetId, cell: CellRef) -> Option<&Style> {
        let sheet = self.sheet(id)?;
        self.styles.get(sheet.style_id(cell))
    }

    /// Borrow a sheet together with the style table, for edits that restyle cells.
    pub fn sheet_styles_mut(&mut self, id: WorksheetId) -> Option<WorksheetStylesMut<'_>> {
        let sheet = self.sheets.iter_mut().find(|s| s.id == id)?;
        Some(WorksheetStylesMut {
            sheet,
            styles: &mut self.styles,
        })
    }
}

/// Mutable view over one worksheet and the workbook style table.
///
/// Styles are immutable values: restyling a cell interns a new style and reassigns the cell's
/// `style_id`.
#[derive(Debug)]
pub struct WorksheetStylesMut<'a> {
    pub sheet: &'a mut Worksheet,
    pub styles: &'a mut StyleTable,
}

impl WorksheetStylesMut<'_> {
    /// Current style of a cell, creating the cell if absent.
    ///
    /// The sheet is left unchanged when the cell's style id is unknown.
    pub fn ensure_cell_style(&mut self, cell: CellRef) -> Result<&Style, StyleError> {
        let style = self.styles.try_get(self.sheet.style_id(cell))?;
        self.sheet.ensure_cell(cell);
        Ok(style)
    }

    /// Intern `style` and assign it to the cell.
    pub fn set_cell_style(&mut self, cell: CellRef, style: Style) {
        let style_id = self.styles.intern(style);
        self.sheet.set_style_id(cell, style_id);
    }
}

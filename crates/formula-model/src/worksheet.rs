use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Cell, CellKey, CellRef, CellValue};

/// Identifier for a worksheet within its workbook.
pub type WorksheetId = u32;

/// A worksheet with sparse cell storage.
///
/// Rows have no storage of their own: a row exists as soon as one of its cells does.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Worksheet {
    pub id: WorksheetId,
    pub name: String,
    #[serde(default)]
    cells: HashMap<CellKey, Cell>,
}

impl Worksheet {
    pub fn new(id: WorksheetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cells: HashMap::new(),
        }
    }

    pub fn cell(&self, cell: CellRef) -> Option<&Cell> {
        self.cells.get(&CellKey::from(cell))
    }

    pub fn cell_mut(&mut self, cell: CellRef) -> Option<&mut Cell> {
        self.cells.get_mut(&CellKey::from(cell))
    }

    /// Get the cell, creating an empty record if it is not stored yet.
    pub fn ensure_cell(&mut self, cell: CellRef) -> &mut Cell {
        self.cells.entry(CellKey::from(cell)).or_default()
    }

    /// Style id of a cell; unstored cells use the default style `0`.
    pub fn style_id(&self, cell: CellRef) -> u32 {
        self.cell(cell).map_or(0, |c| c.style_id)
    }

    pub fn value(&self, cell: CellRef) -> CellValue {
        self.cell(cell)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Set a cell value, dropping the record when it becomes truly empty.
    pub fn set_value(&mut self, cell: CellRef, value: CellValue) {
        let key = CellKey::from(cell);
        let record = self.cells.entry(key).or_default();
        record.value = value;
        if record.is_truly_empty() {
            self.cells.remove(&key);
        }
    }

    pub fn set_style_id(&mut self, cell: CellRef, style_id: u32) {
        self.ensure_cell(cell).style_id = style_id;
    }

    pub fn clear_cell(&mut self, cell: CellRef) {
        self.cells.remove(&CellKey::from(cell));
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Stored cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        let mut keys: Vec<_> = self.cells.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter()
            .filter_map(move |key| self.cells.get(&key).map(|cell| (key.to_ref(), cell)))
    }
}

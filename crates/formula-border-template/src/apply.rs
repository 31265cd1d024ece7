use formula_model::{Border, CellRef, StyleError, WorksheetStylesMut};

use crate::template::BorderTemplate;

/// A sheet that border templates can be applied to.
///
/// Implementations own cell creation and style allocation; the template only decides which
/// border fields change.
pub trait BorderTarget {
    type Error;

    /// Current border of `cell`, creating the row/cell if it does not exist yet.
    fn cell_border(&mut self, cell: CellRef) -> Result<Border, Self::Error>;

    /// Store `border` as the border of `cell`, keeping the rest of its style.
    fn set_cell_border(&mut self, cell: CellRef, border: Border) -> Result<(), Self::Error>;
}

impl BorderTarget for WorksheetStylesMut<'_> {
    type Error = StyleError;

    fn cell_border(&mut self, cell: CellRef) -> Result<Border, StyleError> {
        self.ensure_cell_style(cell).map(|style| style.border_or_default())
    }

    fn set_cell_border(&mut self, cell: CellRef, border: Border) -> Result<(), StyleError> {
        let style = self
            .styles
            .try_get(self.sheet.style_id(cell))?
            .with_border(border);
        self.set_cell_style(cell, style);
        Ok(())
    }
}

impl BorderTemplate {
    /// Push every recorded property onto the matching cell of `target`.
    ///
    /// Cells are visited in row-major order; cells without an entry are never touched, and within
    /// a visited cell only the recorded keys change. Returns the number of cells written.
    /// Collaborator errors abort the walk and are returned as-is.
    pub fn apply_borders<T>(&self, target: &mut T) -> Result<usize, T::Error>
    where
        T: BorderTarget + ?Sized,
    {
        let mut applied = 0usize;
        for (cell, entry) in self.cells() {
            let mut border = target.cell_border(cell)?;
            entry.overlay(&mut border);
            target.set_cell_border(cell, border)?;
            log::trace!("applied border template to {cell}: {border:?}");
            applied += 1;
        }
        log::debug!("applied border template to {applied} cells");
        Ok(applied)
    }
}

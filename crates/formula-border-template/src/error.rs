use formula_model::{CellRef, RangeError};
use thiserror::Error;

use crate::edge::PropertyKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("invalid range: {0}")]
    InvalidRange(#[from] RangeError),
    /// Queried a key the template never recorded; check `num_borders`/`num_border_colors` first.
    #[error("no {key} recorded for {cell}")]
    PropertyNotSet { cell: CellRef, key: PropertyKey },
}

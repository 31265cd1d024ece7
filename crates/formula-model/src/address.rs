use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::{EXCEL_MAX_COLS, EXCEL_MAX_ROWS};

/// A reference to a single cell within a worksheet.
///
/// Rows and columns are **0-indexed**:
/// - `row = 0` is Excel row `1`
/// - `col = 0` is Excel column `A`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef {
    /// 0-indexed row.
    pub row: u32,
    /// 0-indexed column.
    pub col: u32,
}

impl CellRef {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns true if the cell lies within Excel's sheet dimensions.
    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        self.row < EXCEL_MAX_ROWS && self.col < EXCEL_MAX_COLS
    }

    /// Convert to Excel A1 notation (e.g. `A1`, `BC32`).
    pub fn to_a1(self) -> String {
        format!("{}{}", col_to_name(self.col), u64::from(self.row) + 1)
    }

    /// Parse an Excel A1-style reference (e.g. `A1`, `$B$2`).
    pub fn from_a1(a1: &str) -> Result<Self, A1ParseError> {
        let s = a1.trim();
        if s.is_empty() {
            return Err(A1ParseError::Empty);
        }

        let s = s.strip_prefix('$').unwrap_or(s);
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, rest) = s.split_at(split);
        if letters.is_empty() {
            return Err(A1ParseError::MissingColumn);
        }

        let digits = rest.strip_prefix('$').unwrap_or(rest);
        if digits.is_empty() {
            return Err(A1ParseError::MissingRow);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(A1ParseError::TrailingCharacters);
        }

        let col = name_to_col(letters)?;
        let row_1_based: u32 = digits.parse().map_err(|_| A1ParseError::InvalidRow)?;
        if row_1_based == 0 || row_1_based > EXCEL_MAX_ROWS {
            return Err(A1ParseError::InvalidRow);
        }

        Ok(Self::new(row_1_based - 1, col))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

/// A rectangular region within a worksheet.
///
/// Bounds are inclusive. Ranges built through [`Range::new`], [`Range::from_bounds`] or
/// [`Range::from_a1`] always satisfy `start.row <= end.row` and `start.col <= end.col`; the fields
/// are public, so consumers that need the guarantee call [`Range::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: CellRef,
    pub end: CellRef,
}

impl Range {
    /// Construct a new range from two opposite corners, normalizing coordinates if needed.
    pub const fn new(a: CellRef, b: CellRef) -> Self {
        let start_row = if a.row <= b.row { a.row } else { b.row };
        let end_row = if a.row <= b.row { b.row } else { a.row };
        let start_col = if a.col <= b.col { a.col } else { b.col };
        let end_col = if a.col <= b.col { b.col } else { a.col };
        Self {
            start: CellRef::new(start_row, start_col),
            end: CellRef::new(end_row, end_col),
        }
    }

    /// Construct a range from inclusive `(first_row, last_row, first_col, last_col)` bounds.
    ///
    /// Inverted bounds are rejected rather than swapped.
    pub fn from_bounds(
        first_row: u32,
        last_row: u32,
        first_col: u32,
        last_col: u32,
    ) -> Result<Self, RangeError> {
        let range = Self {
            start: CellRef::new(first_row, first_col),
            end: CellRef::new(last_row, last_col),
        };
        range.validate()?;
        Ok(range)
    }

    /// A range covering exactly one cell.
    #[inline]
    pub const fn single(cell: CellRef) -> Self {
        Self {
            start: cell,
            end: cell,
        }
    }

    /// Check that the range is normalized and fits inside Excel's sheet dimensions.
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.start.row > self.end.row {
            return Err(RangeError::InvertedRows {
                first: self.start.row,
                last: self.end.row,
            });
        }
        if self.start.col > self.end.col {
            return Err(RangeError::InvertedColumns {
                first: self.start.col,
                last: self.end.col,
            });
        }
        if !self.end.is_in_bounds() {
            return Err(RangeError::OutOfBounds { cell: self.end });
        }
        Ok(())
    }

    #[inline]
    pub const fn contains(&self, cell: CellRef) -> bool {
        cell.row >= self.start.row
            && cell.row <= self.end.row
            && cell.col >= self.start.col
            && cell.col <= self.end.col
    }

    /// Number of columns in the range.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.end.col - self.start.col + 1
    }

    /// Number of rows in the range.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    #[inline]
    pub const fn is_single_cell(&self) -> bool {
        self.start.row == self.end.row && self.start.col == self.end.col
    }

    /// Swap rows and columns.
    #[inline]
    pub const fn transpose(&self) -> Self {
        Self {
            start: CellRef::new(self.start.col, self.start.row),
            end: CellRef::new(self.end.col, self.end.row),
        }
    }

    /// Iterate the cells of the range in row-major order.
    pub fn iter(&self) -> RangeIter {
        RangeIter {
            range: *self,
            next: Some(self.start),
        }
    }

    /// Parse an Excel A1-style range like `A1:B2` or a single-cell reference like `C3`.
    pub fn from_a1(a1: &str) -> Result<Self, RangeParseError> {
        let s = a1.trim();
        if s.is_empty() {
            return Err(RangeParseError::Empty);
        }

        match s.split_once(':') {
            None => Ok(Range::single(CellRef::from_a1(s)?)),
            Some((a, b)) => Ok(Range::new(CellRef::from_a1(a)?, CellRef::from_a1(b)?)),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_cell() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl IntoIterator for Range {
    type Item = CellRef;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-major iterator over the cells of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: Option<CellRef>,
}

impl Iterator for RangeIter {
    type Item = CellRef;

    fn next(&mut self) -> Option<CellRef> {
        let current = self.next?;
        self.next = if current.col < self.range.end.col {
            Some(CellRef::new(current.row, current.col + 1))
        } else if current.row < self.range.end.row {
            Some(CellRef::new(current.row + 1, self.range.start.col))
        } else {
            None
        };
        Some(current)
    }
}

/// Errors that can occur when parsing an A1 cell reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum A1ParseError {
    #[error("empty A1 reference")]
    Empty,
    #[error("missing column in A1 reference")]
    MissingColumn,
    #[error("missing row in A1 reference")]
    MissingRow,
    #[error("invalid column in A1 reference")]
    InvalidColumn,
    #[error("invalid row in A1 reference")]
    InvalidRow,
    #[error("trailing characters in A1 reference")]
    TrailingCharacters,
}

/// Errors that can occur when parsing an A1 range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RangeParseError {
    #[error("empty A1 range")]
    Empty,
    #[error("invalid cell reference in range: {0}")]
    Cell(#[from] A1ParseError),
}

/// A range whose bounds are not usable as an inclusive rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("first row {first} is after last row {last}")]
    InvertedRows { first: u32, last: u32 },
    #[error("first column {first} is after last column {last}")]
    InvertedColumns { first: u32, last: u32 },
    #[error("cell {cell:?} is outside the sheet")]
    OutOfBounds { cell: CellRef },
}

fn col_to_name(col: u32) -> String {
    // A1 columns are 1-based; we store 0-based.
    let mut n = u64::from(col) + 1;
    let mut out = Vec::<char>::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

fn name_to_col(s: &str) -> Result<u32, A1ParseError> {
    let col = s.bytes().try_fold(0u32, |acc, b| {
        let digit = u32::from(b.to_ascii_uppercase() - b'A') + 1;
        acc.checked_mul(26)
            .and_then(|c| c.checked_add(digit))
            .ok_or(A1ParseError::InvalidColumn)
    })?;
    if col == 0 || col > EXCEL_MAX_COLS {
        return Err(A1ParseError::InvalidColumn);
    }
    Ok(col - 1)
}

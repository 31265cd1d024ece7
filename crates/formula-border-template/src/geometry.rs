//! Translate a range and an [`Extent`] into the cell edges it selects.
//!
//! Only cells that can receive an edge are visited: perimeter-only extents walk the border of the
//! range instead of its interior, so drawing `Outside` over a whole column costs the same as its
//! perimeter.

use std::ops::RangeInclusive;

use formula_model::{CellRef, Range, RangeError};

use crate::edge::EdgeSet;
use crate::extent::Extent;

/// Resolve the edges selected by `extent` over `range`, row-major, skipping cells with no edges.
///
/// `range` must be normalized (see [`Range::validate`]).
pub fn resolve_edges(range: Range, extent: Extent) -> impl Iterator<Item = (CellRef, EdgeSet)> {
    let first_row = range.start.row;
    let last_row = range.end.row;

    let rows = match extent {
        Extent::None => Span::Empty,
        Extent::Top => Span::ends(first_row, first_row),
        Extent::Bottom => Span::ends(last_row, last_row),
        Extent::OutsideHorizontal => Span::ends(first_row, last_row),
        _ => Span::All(first_row..=last_row),
    };

    rows.flat_map(move |row| columns(range, extent, row).map(move |col| CellRef::new(row, col)))
        .filter_map(move |cell| {
            let edges = extent.edges_at(&range, cell);
            (!edges.is_empty()).then_some((cell, edges))
        })
}

/// Number of `(cell, edge)` pairs [`resolve_edges`] yields, without walking the range.
pub fn edge_count(range: Range, extent: Extent) -> Result<u64, RangeError> {
    range.validate()?;
    let rows = u64::from(range.height());
    let cols = u64::from(range.width());
    let count = match extent {
        Extent::None => 0,
        Extent::All => 4 * rows * cols,
        Extent::Inside => 2 * (rows - 1) * cols + 2 * (cols - 1) * rows,
        Extent::Outside => 2 * rows + 2 * cols,
        Extent::Top | Extent::Bottom => cols,
        Extent::Left | Extent::Right => rows,
        Extent::Horizontal => 2 * rows * cols,
        Extent::Vertical => 2 * rows * cols,
        Extent::InsideHorizontal => 2 * (rows - 1) * cols,
        Extent::OutsideHorizontal => 2 * cols,
        Extent::InsideVertical => 2 * (cols - 1) * rows,
        Extent::OutsideVertical => 2 * rows,
    };
    Ok(count)
}

fn columns(range: Range, extent: Extent, row: u32) -> Span {
    let first_col = range.start.col;
    let last_col = range.end.col;
    let on_row_edge = row == range.start.row || row == range.end.row;

    match extent {
        Extent::None => Span::Empty,
        Extent::Left => Span::ends(first_col, first_col),
        Extent::Right => Span::ends(last_col, last_col),
        Extent::OutsideVertical => Span::ends(first_col, last_col),
        Extent::Outside if !on_row_edge => Span::ends(first_col, last_col),
        _ => Span::All(first_col..=last_col),
    }
}

/// Indices along one axis: everything, or just the two ends.
enum Span {
    Empty,
    All(RangeInclusive<u32>),
    Ends { next: Option<u32>, last: u32 },
}

impl Span {
    fn ends(first: u32, last: u32) -> Span {
        Span::Ends {
            next: Some(first),
            last,
        }
    }
}

impl Iterator for Span {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match self {
            Span::Empty => None,
            Span::All(indices) => indices.next(),
            Span::Ends { next, last } => {
                let current = (*next)?;
                *next = (current < *last).then_some(*last);
                Some(current)
            }
        }
    }
}

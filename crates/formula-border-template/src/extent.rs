use formula_model::{CellRef, Range};
use serde::{Deserialize, Serialize};

use crate::edge::{Edge, EdgeSet};

/// Which grid lines of a range a draw call affects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    /// No lines.
    None,
    /// Every edge of every cell.
    All,
    /// Every line strictly inside the range, horizontal and vertical.
    Inside,
    /// The perimeter of the range.
    Outside,
    /// The top side of the range.
    Top,
    /// The bottom side of the range.
    Bottom,
    /// The left side of the range.
    Left,
    /// The right side of the range.
    Right,
    /// Every horizontal line, inner and outer.
    Horizontal,
    /// Every vertical line, inner and outer.
    Vertical,
    /// Horizontal lines strictly between rows.
    InsideHorizontal,
    /// The top and bottom sides of the range.
    OutsideHorizontal,
    /// Vertical lines strictly between columns.
    InsideVertical,
    /// The left and right sides of the range.
    OutsideVertical,
}

impl Extent {
    pub const ALL_VARIANTS: [Extent; 14] = [
        Extent::None,
        Extent::All,
        Extent::Inside,
        Extent::Outside,
        Extent::Top,
        Extent::Bottom,
        Extent::Left,
        Extent::Right,
        Extent::Horizontal,
        Extent::Vertical,
        Extent::InsideHorizontal,
        Extent::OutsideHorizontal,
        Extent::InsideVertical,
        Extent::OutsideVertical,
    ];

    /// Edges of `cell` selected by this extent over `range`.
    ///
    /// Computed from the cell's position relative to the range bounds alone; cells outside the
    /// range get no edges.
    pub fn edges_at(self, range: &Range, cell: CellRef) -> EdgeSet {
        if !range.contains(cell) {
            return EdgeSet::EMPTY;
        }

        let first_row = cell.row == range.start.row;
        let last_row = cell.row == range.end.row;
        let first_col = cell.col == range.start.col;
        let last_col = cell.col == range.end.col;

        match self {
            Extent::None => EdgeSet::EMPTY,
            Extent::All => EdgeSet::ALL,
            Extent::Inside => {
                EdgeSet::when(!first_row, Edge::Top)
                    | EdgeSet::when(!last_row, Edge::Bottom)
                    | EdgeSet::when(!first_col, Edge::Left)
                    | EdgeSet::when(!last_col, Edge::Right)
            }
            Extent::Outside => {
                EdgeSet::when(first_row, Edge::Top)
                    | EdgeSet::when(last_row, Edge::Bottom)
                    | EdgeSet::when(first_col, Edge::Left)
                    | EdgeSet::when(last_col, Edge::Right)
            }
            Extent::Top => EdgeSet::when(first_row, Edge::Top),
            Extent::Bottom => EdgeSet::when(last_row, Edge::Bottom),
            Extent::Left => EdgeSet::when(first_col, Edge::Left),
            Extent::Right => EdgeSet::when(last_col, Edge::Right),
            Extent::Horizontal => EdgeSet::HORIZONTAL,
            Extent::Vertical => EdgeSet::VERTICAL,
            Extent::InsideHorizontal => {
                EdgeSet::when(!first_row, Edge::Top) | EdgeSet::when(!last_row, Edge::Bottom)
            }
            Extent::OutsideHorizontal => {
                EdgeSet::when(first_row, Edge::Top) | EdgeSet::when(last_row, Edge::Bottom)
            }
            Extent::InsideVertical => {
                EdgeSet::when(!first_col, Edge::Left) | EdgeSet::when(!last_col, Edge::Right)
            }
            Extent::OutsideVertical => {
                EdgeSet::when(first_col, Edge::Left) | EdgeSet::when(last_col, Edge::Right)
            }
        }
    }

    /// The extent selecting the same lines after swapping rows and columns.
    pub const fn transpose(self) -> Extent {
        match self {
            Extent::None => Extent::None,
            Extent::All => Extent::All,
            Extent::Inside => Extent::Inside,
            Extent::Outside => Extent::Outside,
            Extent::Top => Extent::Left,
            Extent::Bottom => Extent::Right,
            Extent::Left => Extent::Top,
            Extent::Right => Extent::Bottom,
            Extent::Horizontal => Extent::Vertical,
            Extent::Vertical => Extent::Horizontal,
            Extent::InsideHorizontal => Extent::InsideVertical,
            Extent::OutsideHorizontal => Extent::OutsideVertical,
            Extent::InsideVertical => Extent::InsideHorizontal,
            Extent::OutsideVertical => Extent::OutsideHorizontal,
        }
    }
}

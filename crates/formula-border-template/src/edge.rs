use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use formula_model::{
    Border, BorderEdge, BorderStyle, CellRef, IndexedColor, EXCEL_MAX_COLS, EXCEL_MAX_ROWS,
};
use serde::{Deserialize, Serialize};

/// One side of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// The same grid line seen from the neighboring cell.
    pub const fn opposite(self) -> Edge {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// The edge occupying this position after swapping rows and columns.
    pub const fn transpose(self) -> Edge {
        match self {
            Edge::Top => Edge::Left,
            Edge::Bottom => Edge::Right,
            Edge::Left => Edge::Top,
            Edge::Right => Edge::Bottom,
        }
    }

    /// The cell sharing this edge with `cell`, if it lies inside the sheet.
    pub fn neighbor(self, cell: CellRef) -> Option<CellRef> {
        let (row, col) = match self {
            Edge::Top => (cell.row.checked_sub(1)?, cell.col),
            Edge::Bottom => (cell.row.checked_add(1)?, cell.col),
            Edge::Left => (cell.row, cell.col.checked_sub(1)?),
            Edge::Right => (cell.row, cell.col.checked_add(1)?),
        };
        (row < EXCEL_MAX_ROWS && col < EXCEL_MAX_COLS).then_some(CellRef::new(row, col))
    }

    /// The field of a model [`Border`] that stores this edge.
    pub fn side_of_mut(self, border: &mut Border) -> &mut BorderEdge {
        match self {
            Edge::Top => &mut border.top,
            Edge::Bottom => &mut border.bottom,
            Edge::Left => &mut border.left,
            Edge::Right => &mut border.right,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        })
    }
}

/// A set of [`Edge`]s packed into a byte.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeSet(u8);

impl EdgeSet {
    pub const EMPTY: EdgeSet = EdgeSet(0);
    pub const ALL: EdgeSet = EdgeSet(0b1111);
    pub const HORIZONTAL: EdgeSet = EdgeSet(Edge::Top.bit() | Edge::Bottom.bit());
    pub const VERTICAL: EdgeSet = EdgeSet(Edge::Left.bit() | Edge::Right.bit());

    #[inline]
    pub const fn only(edge: Edge) -> EdgeSet {
        EdgeSet(edge.bit())
    }

    /// `{edge}` when `cond` holds, otherwise empty.
    #[inline]
    pub const fn when(cond: bool, edge: Edge) -> EdgeSet {
        if cond {
            EdgeSet(edge.bit())
        } else {
            EdgeSet::EMPTY
        }
    }

    #[inline]
    pub const fn contains(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Add `edge` to the set.
    pub fn insert(&mut self, edge: Edge) {
        self.0 |= edge.bit();
    }

    /// Edges in the set, in `Top, Bottom, Left, Right` order.
    pub fn iter(self) -> EdgeSetIter {
        EdgeSetIter { set: self, next: 0 }
    }

    pub fn transpose(self) -> EdgeSet {
        self.iter().map(Edge::transpose).collect()
    }
}

impl BitOr for EdgeSet {
    type Output = EdgeSet;

    fn bitor(self, rhs: EdgeSet) -> EdgeSet {
        EdgeSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeSet {
    fn bitor_assign(&mut self, rhs: EdgeSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut set = EdgeSet::EMPTY;
        for edge in iter {
            set.insert(edge);
        }
        set
    }
}

impl IntoIterator for EdgeSet {
    type Item = Edge;
    type IntoIter = EdgeSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an [`EdgeSet`] in `Top, Bottom, Left, Right` order.
#[derive(Clone, Debug)]
pub struct EdgeSetIter {
    set: EdgeSet,
    next: usize,
}

impl Iterator for EdgeSetIter {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        while let Some(&edge) = Edge::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(edge) {
                return Some(edge);
            }
        }
        None
    }
}

/// Which property of an edge a template entry records.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Style,
    Color,
}

/// One of the eight per-cell template keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyKey {
    pub edge: Edge,
    pub kind: PropertyKind,
}

impl PropertyKey {
    /// Key for the border style of `edge`.
    pub const fn style(edge: Edge) -> Self {
        Self {
            edge,
            kind: PropertyKind::Style,
        }
    }

    /// Key for the border color of `edge`.
    pub const fn color(edge: Edge) -> Self {
        Self {
            edge,
            kind: PropertyKind::Color,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PropertyKind::Style => write!(f, "border_{}", self.edge),
            PropertyKind::Color => write!(f, "{}_border_color", self.edge),
        }
    }
}

/// A recorded template value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Style(BorderStyle),
    Color(IndexedColor),
}

impl PropertyValue {
    pub fn as_style(self) -> Option<BorderStyle> {
        match self {
            PropertyValue::Style(style) => Some(style),
            PropertyValue::Color(_) => None,
        }
    }

    pub fn as_color(self) -> Option<IndexedColor> {
        match self {
            PropertyValue::Color(color) => Some(color),
            PropertyValue::Style(_) => None,
        }
    }
}

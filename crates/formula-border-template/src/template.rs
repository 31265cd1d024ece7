use std::collections::HashMap;

use formula_model::{Border, BorderStyle, CellKey, CellRef, IndexedColor, Range};

use crate::edge::{Edge, PropertyKey, PropertyKind, PropertyValue};
use crate::error::TemplateError;
use crate::extent::Extent;
use crate::geometry::resolve_edges;
use crate::options::TemplateOptions;

/// Recorded properties of one cell edge. `None` means "not specified by the template".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeProperties {
    pub style: Option<BorderStyle>,
    pub color: Option<IndexedColor>,
}

impl EdgeProperties {
    pub fn is_empty(&self) -> bool {
        self.style.is_none() && self.color.is_none()
    }
}

/// Template record for one cell: the per-edge style/color overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TemplateEntry {
    edges: [EdgeProperties; 4],
}

impl TemplateEntry {
    pub fn edge(&self, edge: Edge) -> &EdgeProperties {
        &self.edges[edge.index()]
    }

    fn edge_mut(&mut self, edge: Edge) -> &mut EdgeProperties {
        &mut self.edges[edge.index()]
    }

    /// Number of edges with a recorded style, `None` included.
    pub fn num_borders(&self) -> usize {
        self.edges.iter().filter(|e| e.style.is_some()).count()
    }

    /// Number of edges with a recorded color.
    pub fn num_border_colors(&self) -> usize {
        self.edges.iter().filter(|e| e.color.is_some()).count()
    }

    pub fn property(&self, key: PropertyKey) -> Option<PropertyValue> {
        let edge = self.edge(key.edge);
        match key.kind {
            PropertyKind::Style => edge.style.map(PropertyValue::Style),
            PropertyKind::Color => edge.color.map(PropertyValue::Color),
        }
    }

    /// Recorded `(key, value)` pairs, styles before colors, edges in `Top, Bottom, Left, Right`
    /// order.
    pub fn properties(&self) -> impl Iterator<Item = (PropertyKey, PropertyValue)> + '_ {
        [PropertyKind::Style, PropertyKind::Color]
            .into_iter()
            .flat_map(|kind| Edge::ALL.into_iter().map(move |edge| PropertyKey { edge, kind }))
            .filter_map(|key| self.property(key).map(|value| (key, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.iter().all(EdgeProperties::is_empty)
    }

    /// Write the recorded keys onto `border`, leaving unrecorded keys as they are.
    pub fn overlay(&self, border: &mut Border) {
        for edge in Edge::ALL {
            let recorded = self.edge(edge);
            let side = edge.side_of_mut(border);
            if let Some(style) = recorded.style {
                side.style = style;
            }
            if let Some(color) = recorded.color {
                side.color = color;
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum EdgeOp {
    Style(BorderStyle),
    Color(IndexedColor),
    StyleAndColor(BorderStyle, IndexedColor),
}

impl EdgeOp {
    fn clears_line(self) -> bool {
        match self {
            EdgeOp::Style(style) | EdgeOp::StyleAndColor(style, _) => style.is_none(),
            EdgeOp::Color(_) => false,
        }
    }
}

/// A sparse overlay of border styles and colors, built by drawing over ranges and later applied
/// to a sheet with [`BorderTemplate::apply_borders`].
///
/// Later draws overwrite earlier ones key by key; styles and colors are tracked independently.
#[derive(Clone, Debug, Default)]
pub struct BorderTemplate {
    entries: HashMap<CellKey, TemplateEntry>,
    options: TemplateOptions,
}

impl BorderTemplate {
    /// An empty template with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty template using `options`.
    pub fn with_options(options: TemplateOptions) -> Self {
        Self {
            entries: HashMap::new(),
            options,
        }
    }

    /// Options this template draws with.
    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    /// Draw `style` on the edges `extent` selects over `range`.
    ///
    /// A `None` style is recorded like any other value: the edges count towards
    /// [`num_borders`](Self::num_borders) and will clear the line when applied.
    pub fn draw_borders(
        &mut self,
        range: Range,
        style: BorderStyle,
        extent: Extent,
    ) -> Result<(), TemplateError> {
        self.draw(range, extent, EdgeOp::Style(style))
    }

    /// Draw `color` on the edges `extent` selects over `range`.
    ///
    /// [`IndexedColor::AUTOMATIC`] removes any recorded color from those edges instead.
    pub fn draw_border_colors(
        &mut self,
        range: Range,
        color: IndexedColor,
        extent: Extent,
    ) -> Result<(), TemplateError> {
        self.draw(range, extent, EdgeOp::Color(color))
    }

    /// Draw `style` and `color` together. Edges drawn with a `None` style lose their color.
    pub fn draw_borders_with_color(
        &mut self,
        range: Range,
        style: BorderStyle,
        color: IndexedColor,
        extent: Extent,
    ) -> Result<(), TemplateError> {
        self.draw(range, extent, EdgeOp::StyleAndColor(style, color))
    }

    /// Forget every recorded style for cells in `range`.
    pub fn remove_borders(&mut self, range: Range) -> Result<(), TemplateError> {
        range.validate()?;
        self.retain_in(range, |props| props.style = None);
        log::debug!("removed border styles in {range}");
        Ok(())
    }

    /// Forget every recorded color for cells in `range`.
    pub fn remove_border_colors(&mut self, range: Range) -> Result<(), TemplateError> {
        range.validate()?;
        self.retain_in(range, |props| props.color = None);
        log::debug!("removed border colors in {range}");
        Ok(())
    }

    /// Recorded properties of `cell`, if any.
    pub fn entry(&self, cell: CellRef) -> Option<&TemplateEntry> {
        self.entries.get(&key_of(cell)?)
    }

    /// Number of edges of `cell` with a recorded style.
    pub fn num_borders(&self, cell: CellRef) -> usize {
        self.entry(cell).map_or(0, TemplateEntry::num_borders)
    }

    /// Number of edges of `cell` with a recorded color.
    pub fn num_border_colors(&self, cell: CellRef) -> usize {
        self.entry(cell).map_or(0, TemplateEntry::num_border_colors)
    }

    /// Look up one recorded property. Unrecorded keys are an error, never a default.
    pub fn template_property(
        &self,
        cell: CellRef,
        key: PropertyKey,
    ) -> Result<PropertyValue, TemplateError> {
        self.entry(cell)
            .and_then(|entry| entry.property(key))
            .ok_or(TemplateError::PropertyNotSet { cell, key })
    }

    /// Recorded style of one edge.
    pub fn border_style(&self, cell: CellRef, edge: Edge) -> Option<BorderStyle> {
        self.entry(cell)?.edge(edge).style
    }

    /// Recorded color of one edge.
    pub fn border_color(&self, cell: CellRef, edge: Edge) -> Option<IndexedColor> {
        self.entry(cell)?.edge(edge).color
    }

    /// Recorded cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &TemplateEntry)> + '_ {
        let mut keys: Vec<CellKey> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys.into_iter()
            .filter_map(move |key| self.entries.get(&key).map(|entry| (key.to_ref(), entry)))
    }

    /// Number of recorded cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no cell has a recorded property.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn draw(&mut self, range: Range, extent: Extent, op: EdgeOp) -> Result<(), TemplateError> {
        range.validate()?;

        let clear_adjacent = op.clears_line() && self.options.clear_adjacent_edges;
        let mut drawn = 0usize;
        for (cell, edges) in resolve_edges(range, extent) {
            for edge in edges {
                self.apply_op(cell, edge, op);
                drawn += 1;
                if clear_adjacent {
                    if let Some(neighbor) = edge.neighbor(cell) {
                        self.apply_op(neighbor, edge.opposite(), op);
                    }
                }
            }
        }

        log::debug!("drew {op:?} over {range} ({extent:?}): {drawn} edges");
        Ok(())
    }

    fn apply_op(&mut self, cell: CellRef, edge: Edge, op: EdgeOp) {
        let key = CellKey::from(cell);
        match op {
            EdgeOp::Style(style) => {
                self.entries.entry(key).or_default().edge_mut(edge).style = Some(style);
            }
            EdgeOp::Color(color) => self.set_color(key, edge, color),
            EdgeOp::StyleAndColor(style, color) => {
                self.entries.entry(key).or_default().edge_mut(edge).style = Some(style);
                let color = if style.is_none() {
                    IndexedColor::AUTOMATIC
                } else {
                    color
                };
                self.set_color(key, edge, color);
            }
        }
    }

    fn set_color(&mut self, key: CellKey, edge: Edge, color: IndexedColor) {
        if !color.is_automatic() {
            self.entries.entry(key).or_default().edge_mut(edge).color = Some(color);
            return;
        }

        let Some(entry) = self.entries.get_mut(&key) else {
            return;
        };
        entry.edge_mut(edge).color = None;
        if entry.is_empty() {
            self.entries.remove(&key);
        }
    }

    fn retain_in(&mut self, range: Range, mut clear: impl FnMut(&mut EdgeProperties)) {
        self.entries.retain(|key, entry| {
            if range.contains(key.to_ref()) {
                entry.edges.iter_mut().for_each(&mut clear);
            }
            !entry.is_empty()
        });
    }
}

/// Store key for a cell, or `None` when the cell cannot be on a sheet (and so is never recorded).
fn key_of(cell: CellRef) -> Option<CellKey> {
    cell.is_in_bounds().then(|| CellKey::from(cell))
}

//! Border templates: draw border styles and colors over cell ranges, then apply the result to a
//! worksheet in one pass.
//!
//! A [`BorderTemplate`] records, per cell edge, which style and color a range-based drawing
//! operation selected. Draws are cheap in-memory overwrites; nothing touches the sheet until
//! [`BorderTemplate::apply_borders`] pushes the recorded keys through a [`BorderTarget`].
//!
//! ```
//! use formula_border_template::{BorderTemplate, Edge, Extent};
//! use formula_model::{BorderStyle, CellRef, IndexedColor, Range, Workbook};
//!
//! let range = Range::from_a1("A1:C3").unwrap();
//! let mut template = BorderTemplate::new();
//! template.draw_borders(range, BorderStyle::Thin, Extent::All).unwrap();
//! template.draw_borders(range, BorderStyle::Medium, Extent::Outside).unwrap();
//! template.draw_border_colors(range, IndexedColor::RED, Extent::Outside).unwrap();
//!
//! let a1 = CellRef::new(0, 0);
//! assert_eq!(template.border_style(a1, Edge::Top), Some(BorderStyle::Medium));
//! assert_eq!(template.border_style(a1, Edge::Bottom), Some(BorderStyle::Thin));
//!
//! let mut wb = Workbook::new();
//! let sheet_id = wb.add_sheet("Sheet1");
//! let mut target = wb.sheet_styles_mut(sheet_id).unwrap();
//! assert_eq!(template.apply_borders(&mut target).unwrap(), 9);
//! ```

mod apply;
mod edge;
mod error;
mod extent;
pub mod geometry;
mod options;
mod template;

pub use apply::BorderTarget;
pub use edge::{Edge, EdgeSet, EdgeSetIter, PropertyKey, PropertyKind, PropertyValue};
pub use error::TemplateError;
pub use extent::Extent;
pub use geometry::resolve_edges;
pub use options::TemplateOptions;
pub use template::{BorderTemplate, EdgeProperties, TemplateEntry};

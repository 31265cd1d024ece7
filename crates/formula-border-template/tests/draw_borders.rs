use formula_border_template::{
    BorderTemplate, Edge, Extent, PropertyKey, PropertyValue, TemplateError,
};
use formula_model::{BorderStyle, CellRef, Range, RangeError};
use pretty_assertions::assert_eq;

fn a1c3() -> Range {
    Range::from_bounds(0, 2, 0, 2).unwrap()
}

fn style(template: &BorderTemplate, row: u32, col: u32, edge: Edge) -> BorderStyle {
    template
        .template_property(CellRef::new(row, col), PropertyKey::style(edge))
        .ok()
        .and_then(PropertyValue::as_style)
        .unwrap_or_else(|| panic!("no {edge} style at ({row}, {col})"))
}

/// Draw `extent` on a fresh template and return the recorded style count per cell, row-major.
fn counts_after(extent: Extent) -> Vec<Vec<usize>> {
    let mut template = BorderTemplate::new();
    template
        .draw_borders(a1c3(), BorderStyle::Medium, extent)
        .unwrap();
    (0..3)
        .map(|row| {
            (0..3)
                .map(|col| template.num_borders(CellRef::new(row, col)))
                .collect()
        })
        .collect()
}

#[test]
fn num_borders_counts_distinct_edges() {
    let a1 = Range::from_a1("A1").unwrap();
    let cell = CellRef::new(0, 0);
    let mut template = BorderTemplate::new();

    template
        .draw_borders(a1, BorderStyle::Thin, Extent::Top)
        .unwrap();
    assert_eq!(template.num_borders(cell), 1);

    template
        .draw_borders(a1, BorderStyle::Medium, Extent::Bottom)
        .unwrap();
    assert_eq!(template.num_borders(cell), 2);

    // Redrawing an edge overwrites rather than adds.
    template
        .draw_borders(a1, BorderStyle::Thick, Extent::Top)
        .unwrap();
    assert_eq!(template.num_borders(cell), 2);
    assert_eq!(style(&template, 0, 0, Edge::Top), BorderStyle::Thick);

    template
        .draw_borders(a1, BorderStyle::Medium, Extent::None)
        .unwrap();
    assert_eq!(template.num_borders(cell), 2);
}

#[test]
fn template_properties_reflect_the_last_draw() {
    let a1 = Range::from_a1("A1").unwrap();
    let mut template = BorderTemplate::new();

    template
        .draw_borders(a1, BorderStyle::Thin, Extent::Top)
        .unwrap();
    assert_eq!(style(&template, 0, 0, Edge::Top), BorderStyle::Thin);

    template
        .draw_borders(a1, BorderStyle::Medium, Extent::Bottom)
        .unwrap();
    assert_eq!(style(&template, 0, 0, Edge::Bottom), BorderStyle::Medium);
    assert_eq!(style(&template, 0, 0, Edge::Top), BorderStyle::Thin);
}

#[test]
fn unrecorded_properties_are_errors() {
    let mut template = BorderTemplate::new();
    let cell = CellRef::new(0, 0);
    let key = PropertyKey::style(Edge::Left);

    assert_eq!(
        template.template_property(cell, key),
        Err(TemplateError::PropertyNotSet { cell, key })
    );

    template
        .draw_borders(Range::single(cell), BorderStyle::Thin, Extent::Top)
        .unwrap();
    assert_eq!(
        template.template_property(cell, key),
        Err(TemplateError::PropertyNotSet { cell, key })
    );
    assert_eq!(template.border_style(cell, Edge::Left), None);
}

#[test]
fn outside_overlays_all() {
    let mut template = BorderTemplate::new();
    template
        .draw_borders(a1c3(), BorderStyle::Thin, Extent::All)
        .unwrap();
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(template.num_borders(CellRef::new(row, col)), 4);
            for edge in Edge::ALL {
                assert_eq!(style(&template, row, col, edge), BorderStyle::Thin);
            }
        }
    }

    template
        .draw_borders(a1c3(), BorderStyle::Medium, Extent::Outside)
        .unwrap();
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(template.num_borders(CellRef::new(row, col)), 4);
            let expect = |on_perimeter: bool| {
                if on_perimeter {
                    BorderStyle::Medium
                } else {
                    BorderStyle::Thin
                }
            };
            assert_eq!(style(&template, row, col, Edge::Top), expect(row == 0));
            assert_eq!(style(&template, row, col, Edge::Bottom), expect(row == 2));
            assert_eq!(style(&template, row, col, Edge::Left), expect(col == 0));
            assert_eq!(style(&template, row, col, Edge::Right), expect(col == 2));
        }
    }
}

#[test]
fn single_side_extents() {
    assert_eq!(
        counts_after(Extent::Top),
        vec![vec![1, 1, 1], vec![0, 0, 0], vec![0, 0, 0]]
    );
    assert_eq!(
        counts_after(Extent::Bottom),
        vec![vec![0, 0, 0], vec![0, 0, 0], vec![1, 1, 1]]
    );
    assert_eq!(
        counts_after(Extent::Left),
        vec![vec![1, 0, 0], vec![1, 0, 0], vec![1, 0, 0]]
    );
    assert_eq!(
        counts_after(Extent::Right),
        vec![vec![0, 0, 1], vec![0, 0, 1], vec![0, 0, 1]]
    );

    let mut template = BorderTemplate::new();
    template
        .draw_borders(a1c3(), BorderStyle::Medium, Extent::Left)
        .unwrap();
    for row in 0..3 {
        assert_eq!(style(&template, row, 0, Edge::Left), BorderStyle::Medium);
    }
}

#[test]
fn horizontal_and_vertical_families() {
    assert_eq!(counts_after(Extent::Horizontal), vec![vec![2; 3]; 3]);
    assert_eq!(counts_after(Extent::Vertical), vec![vec![2; 3]; 3]);
    assert_eq!(
        counts_after(Extent::InsideHorizontal),
        vec![vec![1, 1, 1], vec![2, 2, 2], vec![1, 1, 1]]
    );
    assert_eq!(
        counts_after(Extent::OutsideHorizontal),
        vec![vec![1, 1, 1], vec![0, 0, 0], vec![1, 1, 1]]
    );
    assert_eq!(
        counts_after(Extent::InsideVertical),
        vec![vec![1, 2, 1], vec![1, 2, 1], vec![1, 2, 1]]
    );
    assert_eq!(
        counts_after(Extent::OutsideVertical),
        vec![vec![1, 0, 1], vec![1, 0, 1], vec![1, 0, 1]]
    );
    assert_eq!(
        counts_after(Extent::Inside),
        vec![vec![2, 3, 2], vec![3, 4, 3], vec![2, 3, 2]]
    );
    assert_eq!(
        counts_after(Extent::Outside),
        vec![vec![2, 1, 2], vec![1, 0, 1], vec![2, 1, 2]]
    );
}

#[test]
fn inside_horizontal_places_lines_between_rows() {
    let mut template = BorderTemplate::new();
    template
        .draw_borders(a1c3(), BorderStyle::Medium, Extent::InsideHorizontal)
        .unwrap();
    for col in 0..3 {
        assert_eq!(style(&template, 0, col, Edge::Bottom), BorderStyle::Medium);
        assert_eq!(template.border_style(CellRef::new(0, col), Edge::Top), None);
        assert_eq!(style(&template, 1, col, Edge::Top), BorderStyle::Medium);
        assert_eq!(style(&template, 1, col, Edge::Bottom), BorderStyle::Medium);
        assert_eq!(style(&template, 2, col, Edge::Top), BorderStyle::Medium);
        assert_eq!(template.border_style(CellRef::new(2, col), Edge::Bottom), None);
    }
}

#[test]
fn none_style_is_recorded_unlike_none_extent() {
    let mut template = BorderTemplate::new();
    template
        .draw_borders(a1c3(), BorderStyle::Thin, Extent::None)
        .unwrap();
    assert!(template.is_empty());

    template
        .draw_borders(a1c3(), BorderStyle::None, Extent::All)
        .unwrap();
    for cell in a1c3() {
        assert_eq!(template.num_borders(cell), 4);
        assert_eq!(
            template.border_style(cell, Edge::Right),
            Some(BorderStyle::None)
        );
    }
}

#[test]
fn none_style_clears_the_facing_edge_of_neighbors() {
    let b2 = Range::from_a1("B2").unwrap();
    let mut template = BorderTemplate::new();
    template
        .draw_borders(b2, BorderStyle::None, Extent::All)
        .unwrap();

    assert_eq!(template.num_borders(CellRef::new(1, 1)), 4);
    assert_eq!(
        template.border_style(CellRef::new(0, 1), Edge::Bottom),
        Some(BorderStyle::None)
    );
    assert_eq!(
        template.border_style(CellRef::new(2, 1), Edge::Top),
        Some(BorderStyle::None)
    );
    assert_eq!(
        template.border_style(CellRef::new(1, 0), Edge::Right),
        Some(BorderStyle::None)
    );
    assert_eq!(
        template.border_style(CellRef::new(1, 2), Edge::Left),
        Some(BorderStyle::None)
    );
    assert_eq!(template.num_borders(CellRef::new(0, 1)), 1);
    assert_eq!(template.num_borders(CellRef::new(0, 0)), 0);
    assert_eq!(template.len(), 5);
}

#[test]
fn visible_styles_never_touch_neighbors() {
    let b2 = Range::from_a1("B2").unwrap();
    let mut template = BorderTemplate::new();
    template
        .draw_borders(b2, BorderStyle::Thick, Extent::All)
        .unwrap();
    assert_eq!(template.len(), 1);
}

#[test]
fn remove_borders_forgets_styles_in_range_only() {
    let mut template = BorderTemplate::new();
    template
        .draw_borders(a1c3(), BorderStyle::Thin, Extent::All)
        .unwrap();
    template
        .remove_borders(Range::from_a1("A1:C2").unwrap())
        .unwrap();

    for cell in a1c3() {
        let expected = if cell.row == 2 { 4 } else { 0 };
        assert_eq!(template.num_borders(cell), expected, "{cell}");
    }
    assert_eq!(template.len(), 3);
}

#[test]
fn malformed_ranges_are_rejected_without_side_effects() {
    let mut template = BorderTemplate::new();
    let inverted = Range {
        start: CellRef::new(2, 0),
        end: CellRef::new(0, 2),
    };

    assert_eq!(
        template.draw_borders(inverted, BorderStyle::Thin, Extent::All),
        Err(TemplateError::InvalidRange(RangeError::InvertedRows {
            first: 2,
            last: 0
        }))
    );
    assert!(matches!(
        template.remove_borders(inverted),
        Err(TemplateError::InvalidRange(_))
    ));
    assert!(template.is_empty());
}

#[test]
fn off_sheet_lookups_report_unset_and_format() {
    let template = BorderTemplate::new();
    let cell = CellRef::new(0, u32::MAX);
    let err = template
        .template_property(cell, PropertyKey::style(Edge::Top))
        .unwrap_err();

    assert_eq!(
        err,
        TemplateError::PropertyNotSet {
            cell,
            key: PropertyKey::style(Edge::Top)
        }
    );
    assert!(err.to_string().contains("MWLQKWV1"), "{err}");
}

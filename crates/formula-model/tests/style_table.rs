use formula_model::{
    Border, BorderEdge, BorderStyle, CellRef, Font, IndexedColor, Style, StyleError, StyleTable,
    Workbook,
};
use pretty_assertions::assert_eq;

#[test]
fn style_table_intern_deduplicates() {
    let mut table = StyleTable::new();

    let style = Style {
        font: Some(Font {
            bold: true,
            color: Some(IndexedColor::RED),
            ..Default::default()
        }),
        number_format: Some("0%".to_string()),
        ..Default::default()
    };

    let a = table.intern(style.clone());
    let b = table.intern(style);
    assert_eq!(a, b, "identical styles should reuse the same id");
    assert_eq!(table.intern(Style::default()), 0);
}

#[test]
fn unknown_style_ids_are_errors() {
    let table = StyleTable::new();
    assert_eq!(table.try_get(7), Err(StyleError::UnknownStyleId(7)));
}

#[test]
fn restyling_through_the_workbook_view_keeps_other_fields() {
    let mut wb = Workbook::new();
    let sheet_id = wb.add_sheet("Sheet1");
    let a1 = CellRef::new(0, 0);

    let bold = Style {
        font: Some(Font {
            bold: true,
            ..Default::default()
        }),
        ..Default::default()
    };
    let bold_id = wb.styles.intern(bold.clone());
    wb.sheet_mut(sheet_id).unwrap().set_style_id(a1, bold_id);

    let mut view = wb.sheet_styles_mut(sheet_id).unwrap();
    let current = view.ensure_cell_style(a1).unwrap().clone();
    let border = Border {
        left: BorderEdge {
            style: BorderStyle::Thick,
            color: IndexedColor::BLUE,
        },
        ..Default::default()
    };
    view.set_cell_style(a1, current.with_border(border));

    let style = wb.cell_style(sheet_id, a1).unwrap();
    assert_eq!(style.font, bold.font);
    assert_eq!(style.border, Some(border));
}

#[test]
fn style_table_json_roundtrip_rebuilds_index() {
    let mut table = StyleTable::new();
    let style = Style {
        fill: Some(IndexedColor::GREEN),
        ..Default::default()
    };
    let id = table.intern(style.clone());

    let json = serde_json::to_string(&table).unwrap();
    let mut reparsed: StyleTable = serde_json::from_str(&json).unwrap();
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed.intern(style), id);
}

#[test]
fn unknown_style_ids_leave_the_sheet_untouched() {
    let mut wb = Workbook::new();
    let sheet_id = wb.add_sheet("Sheet1");
    let b2 = CellRef::new(1, 1);
    wb.sheet_mut(sheet_id).unwrap().set_style_id(b2, 9);

    let mut view = wb.sheet_styles_mut(sheet_id).unwrap();
    assert_eq!(view.ensure_cell_style(b2), Err(StyleError::UnknownStyleId(9)));

    let sheet = wb.sheet(sheet_id).unwrap();
    assert_eq!(sheet.cell_count(), 1);
    assert_eq!(sheet.style_id(b2), 9);
}

#![no_main]

use formula_border_template::{BorderTemplate, Extent, TemplateOptions};
use formula_model::{BorderStyle, IndexedColor, Range, Workbook};
use libfuzzer_sys::fuzz_target;

/// Each draw op consumes this many bytes.
const OP_BYTES: usize = 7;
/// Keep the harness bounded; ranges are small so a run stays cheap.
const MAX_OPS: usize = 64;
const MAX_SPAN: u32 = 16;

fn decode_range(bytes: &[u8]) -> Option<Range> {
    // Bit 7 of the first coordinate byte pushes the range toward the sheet's last row/column so
    // boundary neighbor handling gets exercised.
    let far = bytes[0] & 0x80 != 0;
    let row = u32::from(bytes[0] & 0x7f);
    let col = u32::from(bytes[1]);
    let height = u32::from(bytes[2]) % MAX_SPAN;
    let width = u32::from(bytes[3]) % MAX_SPAN;

    let (row, col) = if far {
        (
            formula_model::EXCEL_MAX_ROWS - 1 - height - row.min(8),
            formula_model::EXCEL_MAX_COLS - 1 - width - col.min(8),
        )
    } else {
        (row, col)
    };
    Range::from_bounds(row, row + height, col, col + width).ok()
}

fuzz_target!(|data: &[u8]| {
    let Some((&flags, data)) = data.split_first() else {
        return;
    };

    let mut template = BorderTemplate::with_options(TemplateOptions {
        clear_adjacent_edges: flags & 1 != 0,
    });

    for op in data.chunks_exact(OP_BYTES).take(MAX_OPS) {
        let Some(range) = decode_range(&op[..4]) else {
            continue;
        };
        let extent = Extent::ALL_VARIANTS[usize::from(op[4]) % Extent::ALL_VARIANTS.len()];
        let style = BorderStyle::ALL[usize::from(op[5] & 0x0f) % BorderStyle::ALL.len()];
        let color = IndexedColor(u16::from(op[6]) % 66);

        let result = match op[5] >> 4 {
            0..=5 => template.draw_borders(range, style, extent),
            6..=10 => template.draw_border_colors(range, color, extent),
            11..=13 => template.draw_borders_with_color(range, style, color, extent),
            14 => template.remove_borders(range),
            _ => template.remove_border_colors(range),
        };
        assert!(result.is_ok(), "in-bounds range rejected: {range}");
    }

    for (cell, entry) in template.cells() {
        assert!(cell.is_in_bounds());
        assert!(!entry.is_empty(), "empty entry kept for {cell}");
        assert!(entry.num_borders() <= 4);
        assert!(entry.num_border_colors() <= 4);
        assert!(entry
            .properties()
            .all(|(_, value)| value.as_color() != Some(IndexedColor::AUTOMATIC)));
    }

    let mut wb = Workbook::new();
    let sheet = wb.add_sheet("Fuzz");
    let Some(mut target) = wb.sheet_styles_mut(sheet) else {
        return;
    };
    let applied = template.apply_borders(&mut target);
    assert_eq!(applied, Ok(template.len()));
});

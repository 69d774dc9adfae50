//! Grid-to-payload conversion

use gridbook_core::Grid;

use crate::payload::{PayloadValue, SheetPayload};

/// Sheet name used for exports
pub const EXPORT_SHEET_NAME: &str = "Sheet1";

/// Serialize a grid's values into an interchange payload
///
/// Styles are dropped; only cell text travels. The payload carries a
/// single sheet named [`EXPORT_SHEET_NAME`].
pub fn payload_from_grid(grid: &Grid) -> SheetPayload {
    let rows = grid
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_empty() {
                        PayloadValue::Empty
                    } else {
                        PayloadValue::text(cell.value.clone())
                    }
                })
                .collect()
        })
        .collect();

    SheetPayload::with_rows(EXPORT_SHEET_NAME, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbook_core::{Color, StyleEdit};

    #[test]
    fn test_export_values_only() {
        let mut grid = Grid::with_size(2, 2);
        grid.set_value(0, 0, "a").unwrap();
        grid.set_value(1, 1, "b").unwrap();
        grid.apply_style_edit(0, 0, StyleEdit::SetColor(Color::rgb(255, 0, 0)))
            .unwrap();

        let payload = payload_from_grid(&grid);
        assert_eq!(payload.name, "Sheet1");
        assert_eq!(payload.row_count(), 2);
        assert_eq!(payload.rows[0][0], PayloadValue::text("a"));
        assert_eq!(payload.rows[0][1], PayloadValue::Empty);
        assert_eq!(payload.rows[1][1], PayloadValue::text("b"));
    }
}

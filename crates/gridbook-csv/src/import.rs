//! Payload-to-grid conversion

use gridbook_core::{Cell, Grid, Result};

use crate::payload::SheetPayload;

/// Build a grid from an interchange payload
///
/// Every row is padded with empty cells to the widest row's length and
/// every value is converted to its text form; styles do not exist in the
/// interchange form. A payload with no rows (or only zero-length rows)
/// yields a 1x1 grid with one empty cell, never a zero-dimension grid.
///
/// The returned grid is complete before the caller swaps it in, so a
/// failed import leaves the previous grid untouched.
pub fn grid_from_payload(payload: &SheetPayload) -> Result<Grid> {
    let max_cols = payload.max_cols();
    if max_cols == 0 {
        return Ok(Grid::with_size(1, 1));
    }

    let ragged = payload.rows.iter().filter(|r| r.len() < max_cols).count();
    if ragged > 0 {
        log::warn!(
            "padding {} ragged row(s) to {} columns on import",
            ragged,
            max_cols
        );
    }

    let rows = payload
        .rows
        .iter()
        .map(|row| {
            (0..max_cols)
                .map(|col| match row.get(col) {
                    Some(value) => Cell::new(value.to_string()),
                    None => Cell::empty(),
                })
                .collect()
        })
        .collect();

    Grid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PayloadValue;

    #[test]
    fn test_import_pads_ragged_rows() {
        let payload = SheetPayload::with_rows(
            "Sheet1",
            vec![
                vec!["a".into(), "b".into()],
                vec!["c".into()],
            ],
        );

        let grid = grid_from_payload(&payload).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.col_count(), 2);
        assert_eq!(grid.value(0, 0), Some("a"));
        assert_eq!(grid.value(0, 1), Some("b"));
        assert_eq!(grid.value(1, 0), Some("c"));
        assert_eq!(grid.value(1, 1), Some(""));
    }

    #[test]
    fn test_import_empty_payload_yields_1x1() {
        let grid = grid_from_payload(&SheetPayload::new("Sheet1")).unwrap();
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.col_count(), 1);
        assert_eq!(grid.value(0, 0), Some(""));
    }

    #[test]
    fn test_import_only_zero_length_rows_yields_1x1() {
        let payload = SheetPayload::with_rows("Sheet1", vec![vec![], vec![]]);
        let grid = grid_from_payload(&payload).unwrap();
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.col_count(), 1);
    }

    #[test]
    fn test_import_stringifies_scalars() {
        let payload = SheetPayload::with_rows(
            "Sheet1",
            vec![vec![
                PayloadValue::Number(10.0),
                PayloadValue::Boolean(true),
                PayloadValue::Empty,
            ]],
        );

        let grid = grid_from_payload(&payload).unwrap();
        assert_eq!(grid.value(0, 0), Some("10"));
        assert_eq!(grid.value(0, 1), Some("TRUE"));
        assert_eq!(grid.value(0, 2), Some(""));
    }
}

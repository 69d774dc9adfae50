//! Bulk text cleanup over a range

use std::collections::HashSet;
use std::fmt;

use gridbook_core::{Grid, RangeRef, Result};

/// The cleanup operation to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Strip leading/trailing whitespace from each cell
    Trim,
    /// Uppercase each cell
    Uppercase,
    /// Lowercase each cell
    Lowercase,
    /// Blank every later occurrence of an already-seen value
    RemoveDuplicates,
}

impl TransformKind {
    /// Display name, as shown to the user
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Trim => "trim",
            TransformKind::Uppercase => "uppercase",
            TransformKind::Lowercase => "lowercase",
            TransformKind::RemoveDuplicates => "remove duplicates",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Apply a cleanup operation to every cell of a range
///
/// Values change, styles never do. Resolver preconditions propagate as
/// [`EmptySelection`]; an empty resolved range is a no-op.
///
/// [`EmptySelection`]: gridbook_core::Error::EmptySelection
pub fn transform(grid: &mut Grid, range: &RangeRef, kind: TransformKind) -> Result<()> {
    let coords = range.resolve(grid)?;

    if kind == TransformKind::RemoveDuplicates {
        return remove_duplicates(grid, &coords);
    }

    for &(row, col) in &coords {
        let new_value = match grid.value(row, col) {
            Some(value) => match kind {
                TransformKind::Trim => value.trim().to_string(),
                TransformKind::Uppercase => value.to_uppercase(),
                TransformKind::Lowercase => value.to_lowercase(),
                // handled above; identity keeps the match exhaustive
                TransformKind::RemoveDuplicates => value.to_string(),
            },
            None => continue,
        };
        grid.set_value(row, col, new_value)?;
    }

    Ok(())
}

/// Keep the first occurrence of each distinct value, blank the rest
///
/// "First" follows the resolved coordinate order (top-to-bottom).
/// Comparison is exact and case-sensitive; the empty string is a value
/// like any other, so only later empties get (re-)blanked.
fn remove_duplicates(grid: &mut Grid, coords: &[(usize, usize)]) -> Result<()> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicates = Vec::new();

    for &(row, col) in coords {
        let Some(value) = grid.value(row, col) else {
            continue;
        };
        if !seen.insert(value.to_string()) {
            duplicates.push((row, col));
        }
    }

    for (row, col) in duplicates {
        grid.set_value(row, col, "")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbook_core::{Error, StyleEdit};

    fn grid_with_column(values: &[&str]) -> Grid {
        let mut grid = Grid::new();
        for (row, value) in values.iter().enumerate() {
            grid.set_value(row, 0, *value).unwrap();
        }
        grid
    }

    fn column_values(grid: &Grid, rows: usize) -> Vec<String> {
        (0..rows)
            .map(|row| grid.value(row, 0).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_trim() {
        let mut grid = grid_with_column(&["  a  ", "\tb", "c"]);
        transform(&mut grid, &RangeRef::new("A", 1, 3), TransformKind::Trim).unwrap();
        assert_eq!(column_values(&grid, 3), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_case_transforms() {
        let mut grid = grid_with_column(&["Hello", "WORLD"]);
        transform(&mut grid, &RangeRef::new("A", 1, 2), TransformKind::Uppercase).unwrap();
        assert_eq!(column_values(&grid, 2), vec!["HELLO", "WORLD"]);

        transform(&mut grid, &RangeRef::new("A", 1, 2), TransformKind::Lowercase).unwrap();
        assert_eq!(column_values(&grid, 2), vec!["hello", "world"]);
    }

    #[test]
    fn test_transform_preserves_style() {
        let mut grid = grid_with_column(&["  x  "]);
        grid.apply_style_edit(0, 0, StyleEdit::ToggleBold).unwrap();

        transform(&mut grid, &RangeRef::new("A", 1, 1), TransformKind::Trim).unwrap();
        assert_eq!(grid.value(0, 0), Some("x"));
        assert!(grid.style(0, 0).unwrap().bold);
    }

    #[test]
    fn test_remove_duplicates_keeps_first() {
        let mut grid = grid_with_column(&["a", "b", "a", "c", "b"]);
        transform(
            &mut grid,
            &RangeRef::new("A", 1, 5),
            TransformKind::RemoveDuplicates,
        )
        .unwrap();
        assert_eq!(column_values(&grid, 5), vec!["a", "b", "", "c", ""]);
    }

    #[test]
    fn test_remove_duplicates_case_sensitive() {
        let mut grid = grid_with_column(&["a", "A", "a"]);
        transform(
            &mut grid,
            &RangeRef::new("A", 1, 3),
            TransformKind::RemoveDuplicates,
        )
        .unwrap();
        assert_eq!(column_values(&grid, 3), vec!["a", "A", ""]);
    }

    #[test]
    fn test_remove_duplicates_empty_string_is_a_value() {
        let mut grid = grid_with_column(&["", "x", "", "x"]);
        transform(
            &mut grid,
            &RangeRef::new("A", 1, 4),
            TransformKind::RemoveDuplicates,
        )
        .unwrap();
        // First empty survives as the first occurrence of "".
        assert_eq!(column_values(&grid, 4), vec!["", "x", "", ""]);
    }

    #[test]
    fn test_transform_outside_range_untouched() {
        let mut grid = grid_with_column(&["  a  ", "  b  "]);
        transform(&mut grid, &RangeRef::new("A", 1, 1), TransformKind::Trim).unwrap();
        assert_eq!(grid.value(1, 0), Some("  b  "));
    }

    #[test]
    fn test_transform_invalid_selection() {
        let mut grid = Grid::new();
        assert!(matches!(
            transform(&mut grid, &RangeRef::new("A", 0, 3), TransformKind::Trim),
            Err(Error::EmptySelection(_))
        ));
    }

    #[test]
    fn test_transform_empty_resolution_is_noop() {
        // Column outside the grid: nothing resolves, nothing fails.
        let mut grid = grid_with_column(&["  a  "]);
        transform(&mut grid, &RangeRef::new("Z", 1, 5), TransformKind::Trim).unwrap();
        assert_eq!(grid.value(0, 0), Some("  a  "));
    }
}

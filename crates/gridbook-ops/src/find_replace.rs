//! Find and replace over a range

use gridbook_core::{Error, Grid, RangeRef, Result};

/// Replace every occurrence of `find` in each cell of a range
///
/// `find` is matched as a literal substring; characters that would carry
/// pattern meaning elsewhere ("." or "*") are just text here. `replace`
/// may be empty. Returns the number of cells modified, not the number of
/// individual occurrences.
///
/// Fails with [`Error::EmptyQuery`] on empty find text, before the range
/// is even looked at; resolver preconditions propagate as
/// [`Error::EmptySelection`].
pub fn find_replace(
    grid: &mut Grid,
    range: &RangeRef,
    find: &str,
    replace: &str,
) -> Result<usize> {
    if find.is_empty() {
        return Err(Error::EmptyQuery);
    }

    let coords = range.resolve(grid)?;
    let mut cells_changed = 0;

    for &(row, col) in &coords {
        let new_value = match grid.value(row, col) {
            Some(value) if value.contains(find) => value.replace(find, replace),
            _ => continue,
        };
        grid.set_value(row, col, new_value)?;
        cells_changed += 1;
    }

    Ok(cells_changed)
}

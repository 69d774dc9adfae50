//! Chart data series

use gridbook_core::{Grid, RangeRef, Result};
use gridbook_ops::numeric_values;

/// A derived label/value series ready for a charting collaborator
///
/// Ephemeral: recomputed on demand from the grid, discarded when
/// superseded. `labels` and `values` always have equal length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartSeries {
    /// Category labels ("Row 1", "Row 2", ...)
    pub labels: Vec<String>,
    /// Numeric values, in range order
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Build a series from a range's numeric-parseable values
    ///
    /// Uses the same numeric filter as the aggregate functions. Returns
    /// `None` when the range holds nothing numeric; the caller decides
    /// how to tell the user. Labels number off from the range's first
    /// row across the filtered values.
    pub fn from_range(grid: &Grid, range: &RangeRef) -> Result<Option<ChartSeries>> {
        let coords = range.resolve(grid)?;
        let values = numeric_values(grid, &coords);

        if values.is_empty() {
            return Ok(None);
        }

        let labels = (0..values.len())
            .map(|i| format!("Row {}", range.row_start as usize + i))
            .collect();

        Ok(Some(ChartSeries { labels, values }))
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series has no points
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridbook_core::Error;

    fn grid_with_column(values: &[&str]) -> Grid {
        let mut grid = Grid::new();
        for (row, value) in values.iter().enumerate() {
            grid.set_value(row, 0, *value).unwrap();
        }
        grid
    }

    #[test]
    fn test_series_from_numeric_range() {
        let grid = grid_with_column(&["10", "20", "30"]);
        let series = ChartSeries::from_range(&grid, &RangeRef::new("A", 1, 3))
            .unwrap()
            .unwrap();

        assert_eq!(series.values, vec![10.0, 20.0, 30.0]);
        assert_eq!(series.labels, vec!["Row 1", "Row 2", "Row 3"]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_series_labels_start_at_range_start() {
        let grid = grid_with_column(&["1", "2", "3", "4"]);
        let series = ChartSeries::from_range(&grid, &RangeRef::new("A", 3, 4))
            .unwrap()
            .unwrap();

        assert_eq!(series.labels, vec!["Row 3", "Row 4"]);
        assert_eq!(series.values, vec![3.0, 4.0]);
    }

    #[test]
    fn test_series_skips_non_numeric() {
        // Labels number off consecutively over the surviving values.
        let grid = grid_with_column(&["10", "abc", "30"]);
        let series = ChartSeries::from_range(&grid, &RangeRef::new("A", 1, 3))
            .unwrap()
            .unwrap();

        assert_eq!(series.values, vec![10.0, 30.0]);
        assert_eq!(series.labels, vec!["Row 1", "Row 2"]);
    }

    #[test]
    fn test_series_none_when_no_numeric_values() {
        let grid = grid_with_column(&["a", "b"]);
        let series = ChartSeries::from_range(&grid, &RangeRef::new("A", 1, 2)).unwrap();
        assert!(series.is_none());
    }

    #[test]
    fn test_series_invalid_selection() {
        let grid = Grid::new();
        assert!(matches!(
            ChartSeries::from_range(&grid, &RangeRef::new("", 1, 2)),
            Err(Error::EmptySelection(_))
        ));
    }
}

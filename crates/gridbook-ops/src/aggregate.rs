//! Aggregate functions over a range

use std::fmt;

use gridbook_core::{Grid, RangeRef, Result};

/// The aggregate function to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    Sum,
    Average,
    Max,
    Min,
    Count,
}

impl AggregateKind {
    /// Display name, as shown to the user
    pub fn name(&self) -> &'static str {
        match self {
            AggregateKind::Sum => "SUM",
            AggregateKind::Average => "AVERAGE",
            AggregateKind::Max => "MAX",
            AggregateKind::Min => "MIN",
            AggregateKind::Count => "COUNT",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of an aggregate computation
///
/// A range with no numeric-parseable values is a valid terminal outcome,
/// not an error; the caller reports it and moves on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateOutcome {
    /// The computed value
    Value(f64),
    /// No cell in the range parsed as a number
    NoNumericValues,
}

impl fmt::Display for AggregateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregateOutcome::Value(v) => write!(f, "{}", v),
            AggregateOutcome::NoNumericValues => write!(f, "No numeric values found"),
        }
    }
}

/// Collect the numeric-parseable values at the given coordinates
///
/// Cell text is trimmed and parsed as f64; parse failures and NaN are
/// discarded. Shared by the aggregate functions and the chart builder.
pub fn numeric_values(grid: &Grid, coords: &[(usize, usize)]) -> Vec<f64> {
    coords
        .iter()
        .filter_map(|&(row, col)| grid.value(row, col))
        .filter_map(|text| text.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan())
        .collect()
}

/// Compute one aggregate function over a range
///
/// Resolves the range (propagating [`EmptySelection`] on a missing
/// column or row bounds), filters the cells down to numeric values, and
/// folds. Native f64 arithmetic, no rounding policy.
///
/// [`EmptySelection`]: gridbook_core::Error::EmptySelection
pub fn aggregate(grid: &Grid, range: &RangeRef, kind: AggregateKind) -> Result<AggregateOutcome> {
    let coords = range.resolve(grid)?;
    let values = numeric_values(grid, &coords);

    if values.is_empty() {
        return Ok(AggregateOutcome::NoNumericValues);
    }

    let result = match kind {
        AggregateKind::Sum => values.iter().sum(),
        AggregateKind::Average => values.iter().sum::<f64>() / values.len() as f64,
        AggregateKind::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        AggregateKind::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregateKind::Count => values.len() as f64,
    };

    Ok(AggregateOutcome::Value(result))
}

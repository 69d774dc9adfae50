//! # gridbook-chart
//!
//! Chart series extraction for gridbook.
//!
//! The engine does not render anything; it hands a [`ChartSeries`]
//! (parallel label and value sequences) to whatever charting
//! collaborator the host application wires up.

mod series;

pub use series::ChartSeries;

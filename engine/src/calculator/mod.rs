// Pay calculations: per-row figures and sheet totals.
pub mod row;
pub mod totals;

pub use row::{breakdown, compute, PayBreakdown};
pub use totals::{aggregate, sheet_totals};

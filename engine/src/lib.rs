// Payroll engine library root
//
// Pure core: `compute` (one row), `aggregate` (sheet totals), `to_csv`
// (export) and `format_currency` (display). Everything else here is support
// for front ends: settings, persistence, CSV read-back and sheet editing.

pub mod calculator;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use calculator::{aggregate, breakdown, compute, sheet_totals, PayBreakdown};
pub use data::csv_export::{to_csv, CSV_HEADER};
pub use error::{PayrollError, Result};
pub use payroll_shared::format_currency;

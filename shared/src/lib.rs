// Data model and display helpers shared by the payroll engine and its front ends.
pub mod models;
pub mod utils;

pub use models::{ComputedRow, EmployeeRow, PayrollSheet, RowPatch, SheetTotals};
pub use utils::currency_format::format_currency;
pub use utils::number_input::number_or_zero;

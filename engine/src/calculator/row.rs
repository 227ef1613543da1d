// Row calculator: raw employee inputs -> derived pay figures.
use payroll_shared::models::{ComputedRow, EmployeeRow};
use serde::Serialize;

/// Every intermediate figure of a row calculation, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBreakdown {
    pub base_pay: f64,
    pub overtime_pay: f64,
    pub gross_pay: f64,
    pub taxable_income: f64,
    pub taxes: f64,
    pub net_pay: f64,
}

/// Evaluates the pay formula for `row`. No rounding is applied; the
/// operation order is fixed so results match existing sheets bit for bit.
pub fn breakdown(row: &EmployeeRow) -> PayBreakdown {
    let base_pay = row.hours * row.hourly_rate;
    let overtime_pay = row.overtime_hours * row.hourly_rate * row.overtime_multiplier;
    let gross_pay = base_pay + overtime_pay + row.bonus;
    let taxable_income = f64::max(0.0, gross_pay - row.pre_tax_deductions);
    let taxes = taxable_income * (row.tax_rate_pct / 100.0);
    // Net pay is not clamped.
    let net_pay = taxable_income - taxes - row.post_tax_deductions;

    PayBreakdown {
        base_pay,
        overtime_pay,
        gross_pay,
        taxable_income,
        taxes,
        net_pay,
    }
}

/// Builds the `ComputedRow` for `row`. Pure: the input is only read.
pub fn compute(row: &EmployeeRow) -> ComputedRow {
    let figures = breakdown(row);
    tracing::trace!(id = %row.id, gross = figures.gross_pay, net = figures.net_pay, "Computed row");
    ComputedRow {
        row: row.clone(),
        gross_pay: figures.gross_pay,
        taxable_income: figures.taxable_income,
        taxes: figures.taxes,
        net_pay: figures.net_pay,
    }
}

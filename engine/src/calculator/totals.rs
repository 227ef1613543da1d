// Sheet aggregator: folds computed rows into sheet totals.
use super::row::compute;
use payroll_shared::models::{ComputedRow, PayrollSheet, SheetTotals};

/// Field-wise sum of every row's derived figures. An empty slice yields all
/// zeros.
pub fn aggregate(rows: &[ComputedRow]) -> SheetTotals {
    rows.iter().fold(SheetTotals::default(), |mut acc, row| {
        acc += row;
        acc
    })
}

/// Computes every row of `sheet` and sums the results.
pub fn sheet_totals(sheet: &PayrollSheet) -> SheetTotals {
    let computed: Vec<ComputedRow> = sheet.rows.iter().map(compute).collect();
    aggregate(&computed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use payroll_shared::models::EmployeeRow;

    fn create_row(id: &str, hours: f64, rate: f64, pre_tax: f64, tax_pct: f64) -> EmployeeRow {
        EmployeeRow {
            id: id.to_string(),
            name: id.to_uppercase(),
            hours,
            hourly_rate: rate,
            overtime_hours: 0.0,
            overtime_multiplier: 1.5,
            bonus: 0.0,
            pre_tax_deductions: pre_tax,
            tax_rate_pct: tax_pct,
            post_tax_deductions: 0.0,
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(
            aggregate(&[]),
            SheetTotals { gross: 0.0, taxable: 0.0, taxes: 0.0, net: 0.0 }
        );
    }

    #[test]
    fn test_aggregate_sums_each_field() {
        let rows = vec![
            compute(&create_row("a", 40.0, 25.0, 0.0, 20.0)),
            compute(&create_row("b", 10.0, 10.0, 150.0, 10.0)),
            compute(&create_row("c", 20.0, 15.0, 50.0, 10.0)),
        ];
        let totals = aggregate(&rows);
        assert_eq!(totals.gross, 1000.0 + 100.0 + 300.0);
        assert_eq!(totals.taxable, 1000.0 + 0.0 + 250.0);
        assert_eq!(totals.taxes, 200.0 + 0.0 + 25.0);
        assert_eq!(totals.net, 800.0 + 0.0 + 225.0);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let mut rows = vec![
            compute(&create_row("a", 40.0, 25.0, 0.0, 20.0)),
            compute(&create_row("b", 12.0, 30.0, 10.0, 25.0)),
            compute(&create_row("c", 8.0, 17.5, 0.0, 0.0)),
        ];
        let forward = aggregate(&rows);
        rows.reverse();
        let backward = aggregate(&rows);
        assert!((forward.gross - backward.gross).abs() < 1e-9);
        assert!((forward.taxable - backward.taxable).abs() < 1e-9);
        assert!((forward.taxes - backward.taxes).abs() < 1e-9);
        assert!((forward.net - backward.net).abs() < 1e-9);
    }

    #[test]
    fn test_sheet_totals_matches_aggregate_of_compute() {
        let sheet = PayrollSheet {
            period_label: "Week 1".to_string(),
            company: "Acme".to_string(),
            rows: vec![
                create_row("a", 40.0, 25.0, 0.0, 20.0),
                create_row("b", 10.0, 10.0, 150.0, 10.0),
            ],
        };
        let computed: Vec<ComputedRow> = sheet.rows.iter().map(compute).collect();
        assert_eq!(sheet_totals(&sheet), aggregate(&computed));
    }
}

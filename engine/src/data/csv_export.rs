// CSV serializer for a payroll sheet.
//
// Layout: one fixed header line, then one line per row in sheet order with the
// nine raw inputs followed by the four computed figures. Lines are joined with
// '\n' and there is no trailing newline.
use crate::calculator::compute;
use crate::error::Result;
use chrono::NaiveDate;
use payroll_shared::models::PayrollSheet;
use std::path::Path;

pub const CSV_HEADER: [&str; 13] = [
    "Employee",
    "Hours",
    "Rate",
    "OT Hours",
    "OT Mult",
    "Bonus",
    "Pre-Tax Ded",
    "Tax %",
    "Post-Tax Ded",
    "Gross",
    "Taxable",
    "Taxes",
    "Net",
];

/// Quotes `value` when it holds a comma, a double quote or a newline, doubling
/// any embedded quotes. Other values pass through untouched.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Plain decimal text: shortest representation that reads back to the same
/// f64, no grouping, no fixed decimals. Negative zero prints as "0".
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

pub fn to_csv(sheet: &PayrollSheet) -> String {
    let mut lines = Vec::with_capacity(sheet.rows.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for row in &sheet.rows {
        let c = compute(row);
        let numbers = [
            c.row.hours,
            c.row.hourly_rate,
            c.row.overtime_hours,
            c.row.overtime_multiplier,
            c.row.bonus,
            c.row.pre_tax_deductions,
            c.row.tax_rate_pct,
            c.row.post_tax_deductions,
            c.gross_pay,
            c.taxable_income,
            c.taxes,
            c.net_pay,
        ];
        let mut fields = Vec::with_capacity(CSV_HEADER.len());
        fields.push(escape_field(&c.row.name));
        fields.extend(numbers.iter().map(|v| format_number(*v)));
        lines.push(fields.join(","));
    }

    lines.join("\n")
}

/// `payroll_2024-11-15.csv` for the default prefix.
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

pub fn write_csv_file(path: &Path, sheet: &PayrollSheet) -> Result<()> {
    std::fs::write(path, to_csv(sheet))?;
    tracing::info!(path = %path.display(), rows = sheet.rows.len(), "Exported sheet to CSV");
    Ok(())
}

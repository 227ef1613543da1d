// Printable text view of a sheet. Money columns go through the currency
// formatter; nothing here feeds back into stored or exported values.
use crate::calculator::{aggregate, compute};
use crate::data::csv_export::format_number;
use payroll_shared::models::{ComputedRow, PayrollSheet};
use payroll_shared::utils::currency_format::format_currency;

pub const DISCLAIMER: &str =
    "Values are estimates; consult your payroll provider for exact calculations.";

const MONEY_HEADERS: [&str; 4] = ["Gross", "Taxable", "Taxes", "Net"];

fn display_name(name: &str) -> String {
    let flat: String = name.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
    if flat.trim().is_empty() {
        "(unnamed)".to_string()
    } else {
        flat
    }
}

fn pad_left(text: &str, width: usize) -> String {
    format!("{:>width$}", text, width = width)
}

fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

pub fn render_report(sheet: &PayrollSheet) -> String {
    let computed: Vec<ComputedRow> = sheet.rows.iter().map(compute).collect();
    let totals = aggregate(&computed);

    let body: Vec<Vec<String>> = computed
        .iter()
        .map(|c| {
            vec![
                display_name(&c.row.name),
                format_number(c.row.hours),
                format_currency(c.row.hourly_rate),
                format_currency(c.gross_pay),
                format_currency(c.taxable_income),
                format_currency(c.taxes),
                format_currency(c.net_pay),
            ]
        })
        .collect();
    let total_row = vec![
        "Totals".to_string(),
        String::new(),
        String::new(),
        format_currency(totals.gross),
        format_currency(totals.taxable),
        format_currency(totals.taxes),
        format_currency(totals.net),
    ];

    let mut headers = vec!["Employee", "Hours", "Rate"];
    headers.extend(MONEY_HEADERS);
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .chain(std::iter::once(&total_row))
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_line = |row: &[String]| -> String {
        row.iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == 0 {
                    pad_right(cell, widths[i])
                } else {
                    pad_left(cell, widths[i])
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::new();
    let company = if sheet.company.is_empty() { "Payroll" } else { sheet.company.as_str() };
    out.push(company.to_string());
    if !sheet.period_label.is_empty() {
        out.push(format!("Pay period: {}", sheet.period_label));
    }
    out.push(String::new());

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let header_line = render_line(&header_cells);
    let rule = "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1));
    out.push(header_line);
    out.push(rule.clone());
    for row in &body {
        out.push(render_line(row));
    }
    out.push(rule);
    out.push(render_line(&total_row));
    out.push(String::new());
    out.push(DISCLAIMER.to_string());

    out.join("\n")
}

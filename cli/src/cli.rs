//! Command-line argument structures for the `payroll` binary.

use clap::{Args, Parser, Subcommand};
use payroll_shared::models::RowPatch;
use payroll_shared::utils::number_input::number_or_zero;
use std::path::PathBuf;

/// Payroll estimation sheet: per-employee gross, taxes and net pay
#[derive(Parser, Debug)]
#[command(name = "payroll")]
#[command(about = "payroll - Estimate gross pay, taxes and net pay for a team", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file overriding the built-in configuration
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sheet state file (defaults to the configured storage path)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List rows with their ids, computed pay and sheet totals
    Show {
        /// Print the sheet, computed rows and totals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Append an employee row, starting from the configured defaults
    Add {
        #[command(flatten)]
        fields: RowFields,
    },

    /// Change some fields of an existing row
    Update {
        /// Row id, or a prefix matching exactly one row
        id: String,

        #[command(flatten)]
        fields: RowFields,
    },

    /// Remove a row
    Remove {
        /// Row id, or a prefix matching exactly one row
        id: String,
    },

    /// Set the company name
    Company { name: String },

    /// Set the pay-period label
    Period { label: String },

    /// Replace the sheet with a fresh one
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Export the sheet as CSV
    Export {
        /// Output file, or `-` for stdout (defaults to payroll_YYYY-MM-DD.csv)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Replace all rows with those of a previously exported CSV file
    Import { file: PathBuf },

    /// Print a formatted report of the sheet
    Print,
}

// Mirrors the sheet's numeric inputs, which accept any text and fall back to 0.
fn parse_amount(text: &str) -> Result<f64, String> {
    Ok(number_or_zero(text))
}

#[derive(Args, Debug, Default)]
pub struct RowFields {
    /// Employee name
    #[arg(long)]
    pub name: Option<String>,

    /// Regular hours worked
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub hours: Option<f64>,

    /// Hourly rate
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub rate: Option<f64>,

    /// Overtime hours worked
    #[arg(long = "ot-hours", value_parser = parse_amount, allow_hyphen_values = true)]
    pub ot_hours: Option<f64>,

    /// Overtime multiplier applied to the hourly rate
    #[arg(long = "ot-mult", value_parser = parse_amount, allow_hyphen_values = true)]
    pub ot_mult: Option<f64>,

    /// Flat bonus
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    pub bonus: Option<f64>,

    /// Deductions taken before tax
    #[arg(long = "pre-tax", value_parser = parse_amount, allow_hyphen_values = true)]
    pub pre_tax: Option<f64>,

    /// Flat tax rate in percent
    #[arg(long = "tax-pct", value_parser = parse_amount, allow_hyphen_values = true)]
    pub tax_pct: Option<f64>,

    /// Deductions taken after tax
    #[arg(long = "post-tax", value_parser = parse_amount, allow_hyphen_values = true)]
    pub post_tax: Option<f64>,
}

impl RowFields {
    pub fn into_patch(self) -> RowPatch {
        RowPatch {
            name: self.name,
            hours: self.hours,
            hourly_rate: self.rate,
            overtime_hours: self.ot_hours,
            overtime_multiplier: self.ot_mult,
            bonus: self.bonus,
            pre_tax_deductions: self.pre_tax,
            tax_rate_pct: self.tax_pct,
            post_tax_deductions: self.post_tax,
        }
    }
}

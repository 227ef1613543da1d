// Command handlers. Each run loads the sheet, applies one command and saves
// the sheet again if it changed.
use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use anyhow::{Context, Result};
use payroll_engine::data::csv_export::{export_file_name, to_csv, write_csv_file};
use payroll_engine::data::csv_import::SheetCsvReader;
use payroll_engine::data::sheet_store::{load_or_default, JsonFileStore, SheetStore};
use payroll_engine::services::sheet_service::lifecycle::default_sheet;
use payroll_engine::services::sheet_service::report::render_report;
use payroll_engine::services::{AlwaysConfirm, ConfirmGate, SheetService, UuidIds};
use payroll_shared::models::{ComputedRow, PayrollSheet, SheetTotals};
use payroll_shared::utils::currency_format::format_currency;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Asks on stderr and reads the answer from stdin. Anything but y/yes is a no.
pub struct StdinConfirm;

impl ConfirmGate for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt);
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

#[derive(Serialize)]
struct SheetView<'a> {
    sheet: &'a PayrollSheet,
    rows: Vec<ComputedRow>,
    totals: SheetTotals,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    tracing::debug!(version = %config.version, "Loaded configuration");

    let state_path = cli.state.clone().unwrap_or_else(|| config.storage_path.clone());
    let store = JsonFileStore::new(&state_path);
    // A sheet that was never saved gets written on first use so its row ids
    // stay stable across runs.
    let fresh = !store.path().exists();
    let settings = config.sheet.clone();
    let sheet = load_or_default(&store, || default_sheet(&settings, &UuidIds));
    let mut service = SheetService::from_sheet(sheet, config.sheet.clone(), Box::new(UuidIds));
    // Repaired ids are saved right away, or `show` would print ids that the
    // next command cannot find.
    let repaired = service.repaired_ids() > 0;

    let changed = match cli.command {
        Commands::Show { json } => {
            show(&service, json)?;
            false
        }
        Commands::Add { fields } => {
            let id = service.add_row_with(&fields.into_patch());
            println!("{}", id);
            true
        }
        Commands::Update { id, fields } => {
            let id = service.resolve_id(&id)?;
            service.update_row(&id, &fields.into_patch())?;
            true
        }
        Commands::Remove { id } => {
            let id = service.resolve_id(&id)?;
            let removed = service.remove_row(&id)?;
            tracing::info!(id = %removed.id, name = %removed.name, "Removed row");
            true
        }
        Commands::Company { name } => {
            service.set_company(&name);
            true
        }
        Commands::Period { label } => {
            service.set_period_label(&label);
            true
        }
        Commands::Clear { yes } => {
            let gate: &dyn ConfirmGate = if yes { &AlwaysConfirm } else { &StdinConfirm };
            let cleared = service.clear(gate);
            if !cleared {
                eprintln!("Clear cancelled");
            }
            cleared
        }
        Commands::Export { out } => {
            export(&service, out)?;
            false
        }
        Commands::Import { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read '{}'", file.display()))?;
            let rows = SheetCsvReader::import_csv(&text, &UuidIds)
                .with_context(|| format!("Failed to import '{}'", file.display()))?;
            tracing::info!(rows = rows.len(), path = %file.display(), "Imported rows");
            service.replace_rows(rows);
            true
        }
        Commands::Print => {
            println!("{}", render_report(service.sheet()));
            false
        }
    };

    if changed || fresh || repaired {
        save(&store, &service)?;
    }
    Ok(())
}

fn save(store: &JsonFileStore, service: &SheetService) -> Result<()> {
    store
        .save(service.sheet())
        .with_context(|| format!("Failed to save sheet to '{}'", store.path().display()))?;
    tracing::info!(path = %store.path().display(), "Sheet saved");
    Ok(())
}

fn show(service: &SheetService, json: bool) -> Result<()> {
    let rows = service.computed_rows();
    let totals = service.totals();

    if json {
        let view = SheetView {
            sheet: service.sheet(),
            rows,
            totals,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let sheet = service.sheet();
    println!("Company: {}", sheet.company);
    println!("Period:  {}", sheet.period_label);
    println!();
    println!(
        "{:<36}  {:<20}  {:>14}  {:>14}  {:>14}",
        "Id", "Employee", "Gross", "Taxes", "Net"
    );
    for c in &rows {
        println!(
            "{:<36}  {:<20}  {:>14}  {:>14}  {:>14}",
            c.row.id,
            c.row.name.replace('\n', " "),
            format_currency(c.gross_pay),
            format_currency(c.taxes),
            format_currency(c.net_pay)
        );
    }
    println!(
        "{:<36}  {:<20}  {:>14}  {:>14}  {:>14}",
        "",
        "Totals",
        format_currency(totals.gross),
        format_currency(totals.taxes),
        format_currency(totals.net)
    );
    Ok(())
}

fn export(service: &SheetService, out: Option<PathBuf>) -> Result<()> {
    let path = out.unwrap_or_else(|| {
        let today = chrono::Utc::now().date_naive();
        PathBuf::from(export_file_name(&service.settings().export_file_prefix, today))
    });

    if path == Path::new("-") {
        print!("{}", to_csv(service.sheet()));
        std::io::stdout().flush()?;
        return Ok(());
    }

    write_csv_file(&path, service.sheet())
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

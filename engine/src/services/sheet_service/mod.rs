// engine/src/services/sheet_service/mod.rs
// SheetService owns one PayrollSheet and applies the row and sheet lifecycle
// operations to it. Row edits live in `rows`, whole-sheet operations in
// `lifecycle`, the printable view in `report`.
use crate::calculator::{aggregate, compute};
use crate::config::SheetSettings;
use payroll_shared::models::{ComputedRow, PayrollSheet, SheetTotals};
use std::sync::atomic::{AtomicU64, Ordering};

pub mod lifecycle;
pub mod report;
pub mod rows;

/// Source of fresh row ids. Ids only need to be unique within a sheet.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Monotonic `<prefix>-1`, `<prefix>-2`, ... ids.
#[derive(Debug)]
pub struct CounterIds {
    prefix: String,
    next: AtomicU64,
}

impl CounterIds {
    pub fn new(prefix: &str) -> Self {
        CounterIds {
            prefix: prefix.to_string(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for CounterIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

/// Yes/no gate consulted before destructive sheet operations.
pub trait ConfirmGate {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that always answers yes (non-interactive use, `--yes`).
#[derive(Debug, Default)]
pub struct AlwaysConfirm;

impl ConfirmGate for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

pub struct SheetService {
    sheet: PayrollSheet,
    settings: SheetSettings,
    ids: Box<dyn IdGenerator>,
    repaired_ids: usize,
}

impl SheetService {
    /// Starts from a fresh sheet with a single default row.
    pub fn new(settings: SheetSettings, ids: Box<dyn IdGenerator>) -> Self {
        let sheet = lifecycle::default_sheet(&settings, ids.as_ref());
        SheetService {
            sheet,
            settings,
            ids,
            repaired_ids: 0,
        }
    }

    /// Wraps an existing sheet, e.g. one loaded from storage. Rows with empty
    /// or repeated ids are given fresh ones; see [`SheetService::repaired_ids`].
    pub fn from_sheet(sheet: PayrollSheet, settings: SheetSettings, ids: Box<dyn IdGenerator>) -> Self {
        let mut service = SheetService {
            sheet,
            settings,
            ids,
            repaired_ids: 0,
        };
        service.repaired_ids = service.ensure_unique_ids();
        service
    }

    /// How many rows got a new id when the sheet was wrapped. Non-zero means
    /// the sheet differs from what was loaded and should be saved.
    pub fn repaired_ids(&self) -> usize {
        self.repaired_ids
    }

    /// Next generated id not already used by a row of the sheet.
    fn fresh_id(&self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.sheet.rows.iter().any(|r| r.id == id) {
                return id;
            }
        }
    }

    pub fn sheet(&self) -> &PayrollSheet {
        &self.sheet
    }

    pub fn settings(&self) -> &SheetSettings {
        &self.settings
    }

    pub fn into_sheet(self) -> PayrollSheet {
        self.sheet
    }

    pub fn computed_rows(&self) -> Vec<ComputedRow> {
        self.sheet.rows.iter().map(compute).collect()
    }

    pub fn totals(&self) -> SheetTotals {
        aggregate(&self.computed_rows())
    }

    pub fn set_company(&mut self, company: &str) {
        self.sheet.company = company.to_string();
    }

    pub fn set_period_label(&mut self, label: &str) {
        self.sheet.period_label = label.to_string();
    }
}

// Whole-sheet operations: creation, clearing, replacing rows, id repair.
use super::{ConfirmGate, IdGenerator, SheetService};
use crate::config::SheetSettings;
use payroll_shared::models::{EmployeeRow, PayrollSheet};
use std::collections::HashSet;

pub const CLEAR_PROMPT: &str = "Clear all rows?";

/// Empty company and period, one default row.
pub fn default_sheet(settings: &SheetSettings, ids: &dyn IdGenerator) -> PayrollSheet {
    PayrollSheet {
        period_label: String::new(),
        company: String::new(),
        rows: vec![settings.default_row.new_row(ids.next_id())],
    }
}

impl SheetService {
    /// Replaces the whole sheet with a default one if `gate` agrees (or if the
    /// settings turn confirmation off). Returns whether the sheet was cleared.
    pub fn clear(&mut self, gate: &dyn ConfirmGate) -> bool {
        if self.settings.confirm_clear && !gate.confirm(CLEAR_PROMPT) {
            tracing::debug!("Clear cancelled");
            return false;
        }
        self.sheet = default_sheet(&self.settings, self.ids.as_ref());
        tracing::info!("Sheet cleared");
        true
    }

    /// Swaps in a new row list (e.g. from a CSV import), keeping company and
    /// period label.
    pub fn replace_rows(&mut self, rows: Vec<EmployeeRow>) {
        self.sheet.rows = rows;
        self.ensure_unique_ids();
    }

    /// Gives a fresh id to every row whose id is empty or already taken by an
    /// earlier row. Fresh ids never collide with any id in the sheet. Returns
    /// how many rows were renamed.
    pub fn ensure_unique_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut renamed = 0;
        for i in 0..self.sheet.rows.len() {
            let id = &self.sheet.rows[i].id;
            if id.is_empty() || !seen.insert(id.clone()) {
                let fresh = self.fresh_id();
                seen.insert(fresh.clone());
                self.sheet.rows[i].id = fresh;
                renamed += 1;
            }
        }
        if renamed > 0 {
            tracing::warn!(renamed, "Repaired empty or duplicate row ids");
        }
        renamed
    }
}

// Row operations: add, partial update, removal, lookup.
use super::SheetService;
use crate::error::{PayrollError, Result};
use payroll_shared::models::{EmployeeRow, RowPatch};

impl SheetService {
    /// Appends a default row with a fresh id and returns that id.
    pub fn add_row(&mut self) -> String {
        self.add_row_with(&RowPatch::default())
    }

    /// Appends a default row with `patch` applied on top. Generated ids that
    /// are already in the sheet are skipped.
    pub fn add_row_with(&mut self, patch: &RowPatch) -> String {
        let mut row = self.settings.default_row.new_row(self.fresh_id());
        patch.apply(&mut row);
        let id = row.id.clone();
        self.sheet.rows.push(row);
        tracing::debug!(id = %id, rows = self.sheet.rows.len(), "Added row");
        id
    }

    pub fn row(&self, id: &str) -> Option<&EmployeeRow> {
        self.sheet.rows.iter().find(|r| r.id == id)
    }

    /// Replaces the fields set in `patch` on the row with `id`.
    pub fn update_row(&mut self, id: &str, patch: &RowPatch) -> Result<()> {
        let row = self
            .sheet
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| PayrollError::RowNotFound(id.to_string()))?;
        patch.apply(row);
        tracing::debug!(id = %id, "Updated row");
        Ok(())
    }

    /// Removes the row with `id` and returns it. The last row may be removed.
    pub fn remove_row(&mut self, id: &str) -> Result<EmployeeRow> {
        let pos = self
            .sheet
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| PayrollError::RowNotFound(id.to_string()))?;
        let removed = self.sheet.rows.remove(pos);
        tracing::debug!(id = %id, rows = self.sheet.rows.len(), "Removed row");
        Ok(removed)
    }

    /// Finds the full id for `key`: an exact id, or a prefix shared by exactly
    /// one row.
    pub fn resolve_id(&self, key: &str) -> Result<String> {
        if self.row(key).is_some() {
            return Ok(key.to_string());
        }
        let mut matches = self
            .sheet
            .rows
            .iter()
            .filter(|r| !key.is_empty() && r.id.starts_with(key));
        match (matches.next(), matches.next()) {
            (Some(row), None) => Ok(row.id.clone()),
            (Some(_), Some(_)) => Err(PayrollError::AmbiguousRowId(key.to_string())),
            _ => Err(PayrollError::RowNotFound(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::CounterIds;
    use super::*;
    use crate::config::SheetSettings;
    use payroll_shared::models::PayrollSheet;

    fn service() -> SheetService {
        SheetService::new(SheetSettings::default(), Box::new(CounterIds::new("r")))
    }

    #[test]
    fn test_add_row_appends_default_row() {
        let mut service = service();
        let id = service.add_row();
        assert_eq!(id, "r-2");
        let rows = &service.sheet().rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, "r-2");
        assert_eq!(rows[1].hours, 40.0);
        assert_eq!(rows[1].tax_rate_pct, 20.0);
    }

    #[test]
    fn test_add_row_with_patch() {
        let mut service = service();
        let patch = RowPatch {
            name: Some("Ada".to_string()),
            hourly_rate: Some(30.0),
            ..RowPatch::default()
        };
        let id = service.add_row_with(&patch);
        let row = service.row(&id).unwrap();
        assert_eq!(row.name, "Ada");
        assert_eq!(row.hourly_rate, 30.0);
        assert_eq!(row.hours, 40.0);
    }

    #[test]
    fn test_update_row_is_partial() {
        let mut service = service();
        let patch = RowPatch {
            overtime_hours: Some(5.0),
            bonus: Some(100.0),
            ..RowPatch::default()
        };
        service.update_row("r-1", &patch).unwrap();
        let row = service.row("r-1").unwrap();
        assert_eq!(row.overtime_hours, 5.0);
        assert_eq!(row.bonus, 100.0);
        assert_eq!(row.hours, 40.0);
        assert_eq!(service.totals().gross, 1287.5);
    }

    #[test]
    fn test_update_unknown_row() {
        let mut service = service();
        let before = service.sheet().clone();
        let result = service.update_row("missing", &RowPatch::default());
        assert!(matches!(result, Err(PayrollError::RowNotFound(id)) if id == "missing"));
        assert_eq!(service.sheet(), &before);
    }

    #[test]
    fn test_remove_row_keeps_order() {
        let mut service = service();
        service.add_row();
        service.add_row();
        let removed = service.remove_row("r-2").unwrap();
        assert_eq!(removed.id, "r-2");
        let ids: Vec<&str> = service.sheet().rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r-1", "r-3"]);
    }

    #[test]
    fn test_remove_last_row_leaves_empty_sheet() {
        let mut service = service();
        service.remove_row("r-1").unwrap();
        assert!(service.sheet().rows.is_empty());
        assert_eq!(service.totals().gross, 0.0);
        assert!(service.remove_row("r-1").is_err());
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut service = service();
        service.remove_row("r-1").unwrap();
        assert_eq!(service.add_row(), "r-2");
    }

    #[test]
    fn test_add_row_skips_ids_already_in_sheet() {
        let settings = SheetSettings::default();
        let sheet = PayrollSheet {
            period_label: String::new(),
            company: String::new(),
            rows: vec![
                settings.default_row.new_row("r-1".to_string()),
                settings.default_row.new_row("r-2".to_string()),
            ],
        };
        let mut service = SheetService::from_sheet(sheet, settings, Box::new(CounterIds::new("r")));
        assert_eq!(service.add_row(), "r-3");
        assert_eq!(service.add_row(), "r-4");
        assert_eq!(service.sheet().rows.len(), 4);
    }

    #[test]
    fn test_resolve_id() {
        let mut service = SheetService::new(SheetSettings::default(), Box::new(CounterIds::new("abc")));
        for _ in 0..10 {
            service.add_row();
        }
        assert_eq!(service.resolve_id("abc-1").unwrap(), "abc-1");
        assert_eq!(service.resolve_id("abc-5").unwrap(), "abc-5");
        assert!(matches!(service.resolve_id("abc-"), Err(PayrollError::AmbiguousRowId(_))));
        assert!(matches!(service.resolve_id("zzz"), Err(PayrollError::RowNotFound(_))));
        assert!(matches!(service.resolve_id(""), Err(PayrollError::RowNotFound(_))));
    }
}

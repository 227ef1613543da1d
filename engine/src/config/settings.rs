// Sheet settings, loaded from a JSON file or left at their defaults
use crate::error::{PayrollError, Result};
use payroll_shared::models::EmployeeRow;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Values a freshly added row starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RowDefaults {
    pub name: String,
    pub hours: f64,
    pub hourly_rate: f64,
    pub overtime_hours: f64,
    pub overtime_multiplier: f64,
    pub bonus: f64,
    pub pre_tax_deductions: f64,
    pub tax_rate_pct: f64,
    pub post_tax_deductions: f64,
}

impl Default for RowDefaults {
    fn default() -> Self {
        RowDefaults {
            name: String::new(),
            hours: 40.0,
            hourly_rate: 25.0,
            overtime_hours: 0.0,
            overtime_multiplier: 1.5,
            bonus: 0.0,
            pre_tax_deductions: 0.0,
            tax_rate_pct: 20.0,
            post_tax_deductions: 0.0,
        }
    }
}

impl RowDefaults {
    pub fn new_row(&self, id: String) -> EmployeeRow {
        EmployeeRow {
            id,
            name: self.name.clone(),
            hours: self.hours,
            hourly_rate: self.hourly_rate,
            overtime_hours: self.overtime_hours,
            overtime_multiplier: self.overtime_multiplier,
            bonus: self.bonus,
            pre_tax_deductions: self.pre_tax_deductions,
            tax_rate_pct: self.tax_rate_pct,
            post_tax_deductions: self.post_tax_deductions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetSettings {
    pub default_row: RowDefaults,
    /// Export files are named `<prefix>_YYYY-MM-DD.csv`.
    pub export_file_prefix: String,
    /// Ask before wiping the sheet.
    pub confirm_clear: bool,
}

impl Default for SheetSettings {
    fn default() -> Self {
        SheetSettings {
            default_row: RowDefaults::default(),
            export_file_prefix: "payroll".to_string(),
            confirm_clear: true,
        }
    }
}

impl SheetSettings {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let settings: SheetSettings = serde_json::from_str(text)
            .map_err(|e| PayrollError::ConfigError(format!("invalid sheet settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PayrollError::ConfigError(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    // Only the file prefix is checked; numeric defaults stay unconstrained
    // like any other row input.
    pub fn validate(&self) -> Result<()> {
        let prefix = self.export_file_prefix.trim();
        if prefix.is_empty() || prefix.contains(['/', '\\']) {
            return Err(PayrollError::ConfigError(format!(
                "export file prefix '{}' is not a valid file name",
                self.export_file_prefix
            )));
        }
        Ok(())
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::AddAssign;

// Numeric fields written by a browser may come back as `null` (JSON has no NaN)
// or be missing altogether. Both coerce to zero so the row stays computable.
fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// One employee's raw inputs for a pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRow {
    /// Opaque row identity, only used for addressing and removal.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub hours: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub hourly_rate: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub overtime_hours: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub overtime_multiplier: f64, // usually 1.5
    #[serde(default, deserialize_with = "number_or_zero")]
    pub bonus: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub pre_tax_deductions: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub tax_rate_pct: f64, // 0-100, not enforced
    #[serde(default, deserialize_with = "number_or_zero")]
    pub post_tax_deductions: f64,
}

/// An `EmployeeRow` together with its derived pay figures.
///
/// Built only by the row calculator; the derived fields are never edited
/// independently of the source row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedRow {
    #[serde(flatten)]
    pub row: EmployeeRow,
    pub gross_pay: f64,
    pub taxable_income: f64,
    pub taxes: f64,
    pub net_pay: f64,
}

/// Aggregate root persisted by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSheet {
    #[serde(default)]
    pub period_label: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub rows: Vec<EmployeeRow>,
}

/// Sheet-level sums of the derived figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetTotals {
    pub gross: f64,
    pub taxable: f64,
    pub taxes: f64,
    pub net: f64,
}

impl AddAssign<&ComputedRow> for SheetTotals {
    fn add_assign(&mut self, row: &ComputedRow) {
        self.gross += row.gross_pay;
        self.taxable += row.taxable_income;
        self.taxes += row.taxes;
        self.net += row.net_pay;
    }
}

/// Partial replacement of an `EmployeeRow`. `None` fields are left untouched;
/// the id is never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_tax_deductions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_tax_deductions: Option<f64>,
}

impl RowPatch {
    pub fn is_empty(&self) -> bool {
        *self == RowPatch::default()
    }

    pub fn apply(&self, row: &mut EmployeeRow) {
        if let Some(name) = &self.name {
            row.name = name.clone();
        }
        let numeric = [
            (self.hours, &mut row.hours),
            (self.hourly_rate, &mut row.hourly_rate),
            (self.overtime_hours, &mut row.overtime_hours),
            (self.overtime_multiplier, &mut row.overtime_multiplier),
            (self.bonus, &mut row.bonus),
            (self.pre_tax_deductions, &mut row.pre_tax_deductions),
            (self.tax_rate_pct, &mut row.tax_rate_pct),
            (self.post_tax_deductions, &mut row.post_tax_deductions),
        ];
        for (patch, field) in numeric {
            if let Some(value) = patch {
                *field = value;
            }
        }
    }
}

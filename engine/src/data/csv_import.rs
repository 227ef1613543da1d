// Reads a sheet export back into rows.
//
// Only the name and the nine raw input columns are taken; the computed
// columns are ignored because they are recomputed from the inputs.
use super::csv_export::CSV_HEADER;
use crate::error::{PayrollError, Result};
use crate::services::sheet_service::IdGenerator;
use csv::{ReaderBuilder, StringRecord};
use payroll_shared::models::EmployeeRow;

pub struct SheetCsvReader;

impl SheetCsvReader {
    pub fn import_csv(text: &str, ids: &dyn IdGenerator) -> Result<Vec<EmployeeRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = rdr.headers()?.clone();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(PayrollError::CsvDataFormatError(
                "missing header line".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let name = Self::get_field(&record, &headers, CSV_HEADER[0], line)?;
            let number = |column: &str| -> Result<f64> {
                let raw = Self::get_field(&record, &headers, column, line)?;
                Self::parse_number(raw, column, line)
            };

            rows.push(EmployeeRow {
                id: ids.next_id(),
                name: name.to_string(),
                hours: number(CSV_HEADER[1])?,
                hourly_rate: number(CSV_HEADER[2])?,
                overtime_hours: number(CSV_HEADER[3])?,
                overtime_multiplier: number(CSV_HEADER[4])?,
                bonus: number(CSV_HEADER[5])?,
                pre_tax_deductions: number(CSV_HEADER[6])?,
                tax_rate_pct: number(CSV_HEADER[7])?,
                post_tax_deductions: number(CSV_HEADER[8])?,
            });
        }
        tracing::debug!(rows = rows.len(), "Imported rows from CSV");
        Ok(rows)
    }

    fn get_field<'a>(
        record: &'a StringRecord,
        headers: &StringRecord,
        name: &str,
        line: u64,
    ) -> Result<&'a str> {
        let pos = headers.iter().position(|header| header == name).ok_or_else(|| {
            PayrollError::CsvDataFormatError(format!("missing '{}' column", name))
        })?;
        record.get(pos).ok_or_else(|| {
            PayrollError::CsvDataFormatError(format!(
                "missing '{}' field at line {}",
                name, line
            ))
        })
    }

    fn parse_number(raw: &str, column: &str, line: u64) -> Result<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(0.0);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                PayrollError::CsvDataFormatError(format!(
                    "invalid number '{}' in '{}' at line {}",
                    raw, column, line
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::csv_export::to_csv;
    use crate::services::sheet_service::CounterIds;
    use payroll_shared::models::PayrollSheet;

    fn create_row(id: &str, name: &str, hours: f64) -> EmployeeRow {
        EmployeeRow {
            id: id.to_string(),
            name: name.to_string(),
            hours,
            hourly_rate: 19.75,
            overtime_hours: 2.5,
            overtime_multiplier: 1.5,
            bonus: 0.0,
            pre_tax_deductions: 12.0,
            tax_rate_pct: 22.5,
            post_tax_deductions: 3.0,
        }
    }

    #[test]
    fn test_import_of_export_reproduces_rows() {
        let sheet = PayrollSheet {
            period_label: String::new(),
            company: String::new(),
            rows: vec![
                create_row("x", "Smith, John \"Jr\"\n", 40.0),
                create_row("y", "Plain", 0.1 + 0.2),
            ],
        };
        let ids = CounterIds::new("imp");
        let rows = SheetCsvReader::import_csv(&to_csv(&sheet), &ids).unwrap();

        assert_eq!(rows.len(), 2);
        for (imported, original) in rows.iter().zip(&sheet.rows) {
            assert_eq!(imported.name, original.name);
            assert_eq!(imported.hours, original.hours);
            assert_eq!(imported.hourly_rate, original.hourly_rate);
            assert_eq!(imported.tax_rate_pct, original.tax_rate_pct);
            assert_eq!(imported.post_tax_deductions, original.post_tax_deductions);
        }
        assert_eq!(rows[0].id, "imp-1");
        assert_eq!(rows[1].id, "imp-2");
    }

    #[test]
    fn test_header_only_imports_nothing() {
        let sheet = PayrollSheet {
            period_label: String::new(),
            company: String::new(),
            rows: vec![],
        };
        let rows = SheetCsvReader::import_csv(&to_csv(&sheet), &CounterIds::new("r")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_column() {
        let text = "Employee,Hours\nAda,40";
        let result = SheetCsvReader::import_csv(text, &CounterIds::new("r"));
        assert!(result.unwrap_err().to_string().contains("missing 'Rate' column"));
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let text = "\
Employee,Hours,Rate,OT Hours,OT Mult,Bonus,Pre-Tax Ded,Tax %,Post-Tax Ded
Ada,40,25,0,1.5,0,0,20,0
Bo,forty,25,0,1.5,0,0,20,0";
        let err = SheetCsvReader::import_csv(text, &CounterIds::new("r")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid number 'forty'"));
        assert!(message.contains("line 3"));
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let result = SheetCsvReader::import_csv("", &CounterIds::new("r"));
        assert!(matches!(result, Err(PayrollError::CsvDataFormatError(_))));
    }
}

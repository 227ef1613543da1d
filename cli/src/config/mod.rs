// CLI configuration: the embedded default.json, optionally overlaid by a
// user-supplied JSON file with the same shape.
use anyhow::{Context, Result};
use payroll_engine::config::SheetSettings;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub version: String,
    /// Where the sheet is persisted between runs.
    pub storage_path: PathBuf,
    pub sheet: SheetSettings,
}

impl AppConfig {
    /// Loads the defaults and overlays `path` on top of them key by key.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut value = Self::default_value()?;
        if let Some(path) = path {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
            let user: Value = serde_json::from_str(&text)
                .with_context(|| format!("Invalid JSON in config file '{}'", path.display()))?;
            merge(&mut value, user);
            tracing::debug!(path = %path.display(), "Applied user configuration");
        }
        Self::from_value(value)
    }

    fn default_value() -> Result<Value> {
        serde_json::from_str(DEFAULT_CONFIG).context("Embedded default configuration is invalid")
    }

    fn from_value(value: Value) -> Result<Self> {
        let config: AppConfig =
            serde_json::from_value(value).context("Configuration does not match the expected shape")?;
        config.sheet.validate()?;
        Ok(config)
    }
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_default_loads() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.storage_path, PathBuf::from("payroll-state.json"));
        assert_eq!(config.sheet, SheetSettings::default());
    }

    #[test]
    fn test_user_file_overlays_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"storagePath": "/tmp/acme.json", "sheet": {{"defaultRow": {{"taxRatePct": 25}}}}}}"#
        )
        .unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/acme.json"));
        assert_eq!(config.sheet.default_row.tax_rate_pct, 25.0);
        assert_eq!(config.sheet.default_row.hours, 40.0);
        assert_eq!(config.sheet.export_file_prefix, "payroll");
    }

    #[test]
    fn test_bad_user_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_merge_replaces_leaves() {
        let mut base = serde_json::json!({"a": {"b": 1, "c": 2}, "d": 3});
        merge(&mut base, serde_json::json!({"a": {"c": 5}, "e": 6}));
        assert_eq!(base, serde_json::json!({"a": {"b": 1, "c": 5}, "d": 3, "e": 6}));
    }
}

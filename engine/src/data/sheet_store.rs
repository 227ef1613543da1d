// Persistence capability for the sheet. The front end owns a store and saves
// after every change; the calculator and serializer never touch it.
use crate::error::{PayrollError, Result};
use payroll_shared::models::PayrollSheet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait SheetStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<PayrollSheet>>;
    fn save(&self, sheet: &PayrollSheet) -> Result<()>;
}

/// Pretty-printed JSON file on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetStore for JsonFileStore {
    fn load(&self) -> Result<Option<PayrollSheet>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)?;
        let sheet = serde_json::from_str(&text)?;
        Ok(Some(sheet))
    }

    fn save(&self, sheet: &PayrollSheet) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(sheet)?;
        std::fs::write(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), rows = sheet.rows.len(), "Saved sheet");
        Ok(())
    }
}

/// In-process store holding the serialized form, so loads go through the
/// same JSON path as the file store.
#[derive(Default)]
pub struct MemoryStore {
    saved: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(json: &str) -> Self {
        MemoryStore {
            saved: Mutex::new(Some(json.to_string())),
        }
    }
}

impl SheetStore for MemoryStore {
    fn load(&self) -> Result<Option<PayrollSheet>> {
        let saved = self
            .saved
            .lock()
            .map_err(|_| PayrollError::StoreError("memory store lock poisoned".to_string()))?;
        match saved.as_deref() {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn save(&self, sheet: &PayrollSheet) -> Result<()> {
        let text = serde_json::to_string(sheet)?;
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| PayrollError::StoreError("memory store lock poisoned".to_string()))?;
        *saved = Some(text);
        Ok(())
    }
}

/// Loads the saved sheet, or builds one with `fallback` when nothing is saved
/// or the saved state cannot be read. Never fails.
pub fn load_or_default<F>(store: &dyn SheetStore, fallback: F) -> PayrollSheet
where
    F: FnOnce() -> PayrollSheet,
{
    match store.load() {
        Ok(Some(sheet)) => sheet,
        Ok(None) => {
            tracing::debug!("No saved sheet, starting a new one");
            fallback()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Saved sheet could not be loaded, starting a new one");
            fallback()
        }
    }
}

// Sheet I/O: CSV export and read-back, persisted state.
pub mod csv_export;
pub mod csv_import;
pub mod sheet_store;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),

    #[error("Sheet store error: {0}")]
    StoreError(String),

    #[error("No row with id '{0}'")]
    RowNotFound(String),

    #[error("Row id prefix '{0}' matches more than one row")]
    AmbiguousRowId(String),
}

pub type Result<T> = std::result::Result<T, PayrollError>;

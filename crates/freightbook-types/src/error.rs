//! Error types for freightbook

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Ledger addressing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Row index {index} is out of range (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Persistence slot errors
///
/// `Corrupted` is recovered inside the repositories: a corrupt slot reads as
/// an empty ledger.
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("Ledger data corrupted: {0}")]
    Corrupted(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export. Add some entries first.")]
    Empty,

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("CSV export error: {0}")]
    Csv(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Slot error: {0}")]
    Slot(#[from] SlotError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, Error>;

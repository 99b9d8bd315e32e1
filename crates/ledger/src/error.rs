//! The module contains the errors the ledger can throw.
//!
//! - [`LedgerError`] covers invalid transactions and persistence failures.
//! - [`ExportError`] covers spreadsheet generation.
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error("Totals overflow: {0}")]
    Overflow(String),
    #[error("Ledger file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ledger file is not valid: {0}")]
    Json(#[from] serde_json::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::EmptyCategory, Self::EmptyCategory) => true,
            (Self::Overflow(a), Self::Overflow(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// Errors raised while building a spreadsheet export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No transactions to export")]
    NoData,
    #[error("Cannot write to a spreadsheet: {0}")]
    Unrepresentable(String),
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

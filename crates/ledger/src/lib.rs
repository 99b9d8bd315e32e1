//! Per-user expense ledger.
//!
//! The ledger keeps, for each user, the ordered list of recorded
//! [`Transaction`]s, persists it to a flat JSON file through
//! [`LedgerStore`], and builds reports ([`totals_by_category`],
//! [`totals_by_month`]) and spreadsheet exports ([`export_xlsx`]) from it.

pub use error::{ExportError, LedgerError};
pub use export::{EXPORT_FILE_NAME, EXPORT_SHEET_NAME, export_xlsx};
pub use money::{format_amount, parse_amount};
pub use statistics::{CategoryTotals, MonthKey, MonthlyTotals, totals_by_category, totals_by_month};
pub use store::{Ledger, LedgerStore};
pub use transactions::{DATE_FORMAT, Transaction, TransactionKind};

mod error;
mod export;
mod money;
mod statistics;
mod store;
mod transactions;

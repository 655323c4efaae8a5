//! Accounting module (general ledger).
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns. The
//! ledger is append-only and is the authoritative record of all money
//! movement.

pub mod ledger;
pub mod transaction;

pub use ledger::{Ledger, LedgerTotals};
pub use transaction::{
    to_minor_units, EntrySide, FinancialTransaction, RecordTransaction, TransactionType,
};

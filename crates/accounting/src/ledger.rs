use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use medius_core::{Entity, TransactionId};

use crate::transaction::{EntrySide, FinancialTransaction, TransactionType};

/// Append-only general ledger, newest entry first.
///
/// The ledger is the single source of truth for money movement: entries are
/// posted through [`Ledger::post`] and never edited or removed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<FinancialTransaction>,
}

/// Summary totals over the full ledger, in minor currency units.
///
/// Balances follow the debit-positive convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerTotals {
    pub revenue: i128,
    pub expense: i128,
    pub debit_total: i128,
    pub credit_total: i128,
}

impl LedgerTotals {
    /// Revenue net of expenses.
    pub fn net(&self) -> i128 {
        self.revenue - self.expense
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post an entry at the head of the ledger (most-recent-first ordering).
    pub fn post(&mut self, txn: FinancialTransaction) {
        self.entries.insert(0, txn);
    }

    /// All entries, newest first.
    pub fn entries(&self) -> &[FinancialTransaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently posted entry.
    pub fn latest(&self) -> Option<&FinancialTransaction> {
        self.entries.first()
    }

    pub fn find(&self, id: TransactionId) -> Option<&FinancialTransaction> {
        self.entries.iter().find(|t| t.id() == id)
    }

    /// Entries linked to a given source record (e.g. a patient id).
    pub fn entries_for(&self, related: uuid::Uuid) -> Vec<&FinancialTransaction> {
        self.entries
            .iter()
            .filter(|t| t.related_record() == Some(related))
            .collect()
    }

    /// Summary totals by type and by column.
    pub fn totals(&self) -> LedgerTotals {
        let mut totals = LedgerTotals::default();
        for txn in &self.entries {
            let amount = txn.amount() as i128;
            match txn.kind() {
                TransactionType::Revenue => totals.revenue += amount,
                TransactionType::Expense => totals.expense += amount,
                TransactionType::Asset | TransactionType::Liability => {}
            }
            match txn.entry_side() {
                EntrySide::Debit => totals.debit_total += amount,
                EntrySide::Credit => totals.credit_total += amount,
            }
        }
        totals
    }

    /// Per-account balances, debit-positive convention.
    pub fn account_balances(&self) -> BTreeMap<String, i128> {
        let mut balances: BTreeMap<String, i128> = BTreeMap::new();
        for txn in &self.entries {
            let delta = match txn.entry_side() {
                EntrySide::Debit => txn.amount() as i128,
                EntrySide::Credit => -(txn.amount() as i128),
            };
            *balances.entry(txn.account_code().to_string()).or_default() += delta;
        }
        balances
    }
}

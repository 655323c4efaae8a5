//! Read-only views handed to the AI gateway.
//!
//! The gateway crate never depends on the domain crates; this module does
//! the mapping in the other direction.

use medius_ai::{InventoryItemSnapshot, TransactionSnapshot};
use medius_accounting::FinancialTransaction;
use medius_pharmacy::InventoryItem;

use crate::state::HospitalState;

impl HospitalState {
    /// The whole catalogue, as the forecasting prompt expects it.
    pub fn inventory_snapshot(&self) -> Vec<InventoryItemSnapshot> {
        self.inventory.iter().map(item_snapshot).collect()
    }

    /// All ledger entries, newest first, as the analysis prompt expects
    /// them. The gateway truncates to its own history limit.
    pub fn transaction_snapshot(&self) -> Vec<TransactionSnapshot> {
        self.ledger.entries().iter().map(transaction_snapshot).collect()
    }
}

fn item_snapshot(item: &InventoryItem) -> InventoryItemSnapshot {
    InventoryItemSnapshot {
        id: item.id_typed().to_string(),
        name: item.name().to_string(),
        category: item.category().as_str().to_string(),
        current_stock: item.current_stock(),
        reorder_level: item.reorder_level(),
        last_usage_rate: item.last_usage_rate(),
    }
}

fn transaction_snapshot(txn: &FinancialTransaction) -> TransactionSnapshot {
    TransactionSnapshot {
        id: txn.id_typed().to_string(),
        date: txn.date().to_string(),
        description: txn.description().to_string(),
        // Ledger amounts are minor units; prompts use major units.
        amount: txn.amount() as f64 / 100.0,
        kind: txn.kind().to_string(),
        account_code: txn.account_code().to_string(),
    }
}

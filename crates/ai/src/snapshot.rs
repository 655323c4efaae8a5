//! Flat domain views handed to the model.
//!
//! This crate never depends on the domain crates; callers map their records
//! into these snapshots. The serialized keys (`currentStock`,
//! `reorderLevel`, `lastUsageRate`, ...) are the names the prompts refer to,
//! so renames here must be mirrored in [`crate::prompt`].

use serde::{Deserialize, Serialize};

/// Inventory item as presented to the forecasting prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemSnapshot {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_stock: i64,
    pub reorder_level: i64,
    /// Units consumed per week.
    pub last_usage_rate: i64,
}

/// Ledger entry as presented to the financial-analysis prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSnapshot {
    pub id: String,
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    pub description: String,
    /// Major currency units.
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub account_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serializes_with_the_keys_the_prompt_names() {
        let snapshot = InventoryItemSnapshot {
            id: "INV-003".to_string(),
            name: "Paracetamol IV".to_string(),
            category: "medicine".to_string(),
            current_stock: 40,
            reorder_level: 50,
            last_usage_rate: 15,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"currentStock\":40"));
        assert!(json.contains("\"reorderLevel\":50"));
        assert!(json.contains("\"lastUsageRate\":15"));
    }

    #[test]
    fn transaction_snapshot_uses_type_key() {
        let snapshot = TransactionSnapshot {
            id: "TXN-9001".to_string(),
            date: "2023-10-24".to_string(),
            description: "Patient service payment".to_string(),
            amount: 1200.0,
            kind: "REVENUE".to_string(),
            account_code: "4001".to_string(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"type\":\"REVENUE\""));
        assert!(json.contains("\"accountCode\":\"4001\""));
    }
}

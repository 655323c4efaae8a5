//! Prompt builders, one per gateway operation.
//!
//! Each prompt embeds a JSON-serialized snapshot; the instruction text
//! references the snapshot's serialized key names.

use crate::error::AiError;
use crate::snapshot::{InventoryItemSnapshot, TransactionSnapshot};

pub fn forecast_prompt(items: &[InventoryItemSnapshot]) -> Result<String, AiError> {
    let data = serialize(items)?;
    Ok(format!(
        "Analyze the following hospital inventory data. Based on the \
         'currentStock', 'reorderLevel' and 'lastUsageRate', predict the \
         demand for the next month and recommend order quantities. Consider \
         a safety stock buffer of 20%.\n\nInventory data: {data}"
    ))
}

pub fn insights_prompt(transactions: &[TransactionSnapshot]) -> Result<String, AiError> {
    let data = serialize(transactions)?;
    Ok(format!(
        "You are a chief financial officer's AI assistant. Analyze these \
         recent financial transactions. Identify anomalies, cost-saving \
         opportunities or revenue trends. Provide 3 concise, high-impact \
         strategic insights.\n\nTransactions: {data}"
    ))
}

pub fn invoice_prompt(raw_text: &str) -> String {
    format!(
        "Extract valid invoice data from the following unstructured text. \
         If data is missing, estimate confidence as low.\n\nInvoice text: \
         \"{raw_text}\""
    )
}

fn serialize<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AiError> {
    serde_json::to_string(value).map_err(|e| AiError::PromptPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_prompt_embeds_every_item() {
        let items = vec![
            InventoryItemSnapshot {
                id: "INV-001".to_string(),
                name: "Amoxicillin 500mg".to_string(),
                category: "medicine".to_string(),
                current_stock: 120,
                reorder_level: 150,
                last_usage_rate: 45,
            },
            InventoryItemSnapshot {
                id: "INV-002".to_string(),
                name: "Surgical Masks".to_string(),
                category: "consumable".to_string(),
                current_stock: 4500,
                reorder_level: 1000,
                last_usage_rate: 500,
            },
        ];
        let prompt = forecast_prompt(&items).unwrap();
        assert!(prompt.contains("safety stock buffer of 20%"));
        assert!(prompt.contains("INV-001"));
        assert!(prompt.contains("Surgical Masks"));
    }

    #[test]
    fn invoice_prompt_quotes_the_raw_text() {
        let prompt = invoice_prompt("Vendor: MedSupply Corp\nTotal: $500");
        assert!(prompt.contains("\"Vendor: MedSupply Corp\nTotal: $500\""));
        assert!(prompt.contains("estimate confidence as low"));
    }
}

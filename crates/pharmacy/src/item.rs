use core::str::FromStr;
use serde::{Deserialize, Serialize};

use medius_core::{DomainError, Entity, InventoryItemId};

/// Inventory item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Medicine,
    Equipment,
    Consumable,
}

impl ItemCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Medicine => "medicine",
            Self::Equipment => "equipment",
            Self::Consumable => "consumable",
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = DomainError;

    /// Closed set: unrecognized categories are rejected instead of silently
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "medicine" => Ok(Self::Medicine),
            "equipment" => Ok(Self::Equipment),
            "consumable" => Ok(Self::Consumable),
            other => Err(DomainError::validation(format!(
                "unknown item category: {other:?}"
            ))),
        }
    }
}

/// Replenishment status derived from stock level vs. reorder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Stock at or below the reorder level.
    Low,
    Ok,
}

/// Command: NewItem (used to seed the catalogue).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: ItemCategory,
    pub current_stock: i64,
    /// Unit price in smallest currency unit (e.g., cents).
    pub unit_price: i64,
    pub reorder_level: i64,
    /// Average consumption in units per week.
    pub last_usage_rate: i64,
}

/// Pharmacy inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: InventoryItemId,
    name: String,
    category: ItemCategory,
    current_stock: i64,
    unit_price: i64,
    reorder_level: i64,
    last_usage_rate: i64,
}

impl InventoryItem {
    /// Validate and build a catalogue entry.
    ///
    /// Rejections: blank name, negative stock/price/threshold/usage.
    pub fn create(id: InventoryItemId, cmd: NewItem) -> Result<Self, DomainError> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if cmd.current_stock < 0 {
            return Err(DomainError::invariant("stock cannot be negative"));
        }
        if cmd.unit_price < 0 || cmd.reorder_level < 0 || cmd.last_usage_rate < 0 {
            return Err(DomainError::validation(
                "price, reorder level and usage rate cannot be negative",
            ));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            category: cmd.category,
            current_stock: cmd.current_stock,
            unit_price: cmd.unit_price,
            reorder_level: cmd.reorder_level,
            last_usage_rate: cmd.last_usage_rate,
        })
    }

    pub fn id_typed(&self) -> InventoryItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    pub fn unit_price(&self) -> i64 {
        self.unit_price
    }

    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }

    pub fn last_usage_rate(&self) -> i64 {
        self.last_usage_rate
    }

    /// An item is low once stock falls to the reorder level.
    pub fn stock_status(&self) -> StockStatus {
        if self.current_stock <= self.reorder_level {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> InventoryItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(stock: i64, reorder: i64) -> NewItem {
        NewItem {
            name: "Amoxicillin 500mg".to_string(),
            category: ItemCategory::Medicine,
            current_stock: stock,
            unit_price: 15_00,
            reorder_level: reorder,
            last_usage_rate: 45,
        }
    }

    #[test]
    fn create_builds_item() {
        let item = InventoryItem::create(InventoryItemId::new(), new_item(120, 150)).unwrap();
        assert_eq!(item.name(), "Amoxicillin 500mg");
        assert_eq!(item.category(), ItemCategory::Medicine);
        assert_eq!(item.current_stock(), 120);
    }

    #[test]
    fn stock_at_or_below_reorder_level_is_low() {
        let below = InventoryItem::create(InventoryItemId::new(), new_item(120, 150)).unwrap();
        assert_eq!(below.stock_status(), StockStatus::Low);

        let at = InventoryItem::create(InventoryItemId::new(), new_item(150, 150)).unwrap();
        assert_eq!(at.stock_status(), StockStatus::Low);

        let above = InventoryItem::create(InventoryItemId::new(), new_item(151, 150)).unwrap();
        assert_eq!(above.stock_status(), StockStatus::Ok);
    }

    #[test]
    fn negative_stock_is_rejected() {
        let err = InventoryItem::create(InventoryItemId::new(), new_item(-1, 150)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut cmd = new_item(10, 5);
        cmd.name = " ".to_string();
        let err = InventoryItem::create(InventoryItemId::new(), cmd).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn category_parses_known_values_and_rejects_others() {
        assert_eq!(
            "Consumable".parse::<ItemCategory>().unwrap(),
            ItemCategory::Consumable
        );
        assert!("Stationery".parse::<ItemCategory>().is_err());
    }
}

//! Pharmacy & materials domain module.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns. Stock
//! levels are read-only in this scope; restock/consumption mutation is a
//! non-goal.

pub mod item;

pub use item::{InventoryItem, ItemCategory, NewItem, StockStatus};

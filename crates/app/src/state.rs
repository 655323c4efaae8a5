use medius_accounting::Ledger;
use medius_core::{Entity, InventoryItemId, PatientId};
use medius_patients::Patient;
use medius_pharmacy::{InventoryItem, StockStatus};

/// Process-wide application state: the three collections every module reads.
///
/// Mutation is funneled exclusively through the synchronizer entry points
/// ([`HospitalState::register_patient`] and [`HospitalState::post_invoice`]);
/// everything else sees read-only slices. Single-threaded by design: one
/// `&mut` owner, no interior mutability, so within one entry point the
/// domain write and the ledger write are observed atomically.
#[derive(Debug, Clone, Default)]
pub struct HospitalState {
    pub(crate) patients: Vec<Patient>,
    pub(crate) inventory: Vec<InventoryItem>,
    pub(crate) ledger: Ledger,
}

impl HospitalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty state pre-loaded with a fixed pharmacy catalogue.
    ///
    /// Stock levels are read-only in this scope, so the catalogue is set
    /// once at construction.
    pub fn with_inventory(inventory: Vec<InventoryItem>) -> Self {
        Self {
            inventory,
            ..Self::default()
        }
    }

    /// Patients, newest registration first.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn find_patient(&self, id: PatientId) -> Option<&Patient> {
        find_by_id(&self.patients, id)
    }

    pub fn find_item(&self, id: InventoryItemId) -> Option<&InventoryItem> {
        find_by_id(&self.inventory, id)
    }

    /// Case-insensitive search over patient names and ids. A blank query
    /// returns everyone.
    pub fn search_patients(&self, query: &str) -> Vec<&Patient> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.patients.iter().collect();
        }
        self.patients
            .iter()
            .filter(|p| {
                p.name().to_lowercase().contains(&needle)
                    || p.id_typed().to_string().contains(&needle)
            })
            .collect()
    }

    /// Patients currently under care (not discharged).
    pub fn active_patient_count(&self) -> usize {
        self.patients.iter().filter(|p| p.is_active()).count()
    }

    /// Items at or below their reorder level.
    pub fn low_stock_items(&self) -> Vec<&InventoryItem> {
        self.inventory
            .iter()
            .filter(|i| i.stock_status() == StockStatus::Low)
            .collect()
    }
}

fn find_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<&E> {
    items.iter().find(|e| e.id() == id)
}

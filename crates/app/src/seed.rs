//! Sample data: a plausible small working day.

use chrono::NaiveDate;

use medius_accounting::{FinancialTransaction, RecordTransaction, TransactionType};
use medius_core::{DomainResult, InventoryItemId, PatientId, TransactionId};
use medius_patients::{Gender, Patient, PatientStatus, RegisterPatient};
use medius_pharmacy::{InventoryItem, ItemCategory, NewItem};

use crate::state::HospitalState;

impl HospitalState {
    /// State pre-loaded with a handful of patients, a pharmacy catalogue and
    /// an opening ledger. Intended for demos and tests; everything goes
    /// through the validated constructors.
    pub fn with_sample_data() -> DomainResult<Self> {
        let mut state = Self::with_inventory(sample_inventory()?);

        // Newest admission first, matching the registration ordering rule.
        state.patients = vec![
            sample_patient("Emily Blunt", 28, Gender::Female, PatientStatus::Inpatient, "Private", 22)?,
            sample_patient("John Doe", 45, Gender::Male, PatientStatus::Outpatient, "BlueCross", 21)?,
            sample_patient("Sarah Connor", 34, Gender::Female, PatientStatus::Inpatient, "Aetna", 20)?,
        ];

        // Posted oldest first so the ledger head is the newest entry.
        for (day, description, amount, kind, account) in [
            (22, "Insurance claim settlement", 3_200_00, TransactionType::Revenue, "4002"),
            (23, "Utilities - Electricity", 850_00, TransactionType::Expense, "5002"),
            (24, "Pharmacy restock: Vendor ABC", 4_500_00, TransactionType::Expense, "5001"),
            (24, "Patient service payment", 1_200_00, TransactionType::Revenue, "4001"),
        ] {
            state.ledger.post(FinancialTransaction::record(
                TransactionId::new(),
                RecordTransaction {
                    date: october(day),
                    description: description.to_string(),
                    amount,
                    kind,
                    account_code: account.to_string(),
                    related_record: None,
                },
            )?);
        }

        Ok(state)
    }
}

fn october(day: u32) -> NaiveDate {
    // Sample data lives entirely in October 2023.
    NaiveDate::from_ymd_opt(2023, 10, day).unwrap_or_default()
}

fn sample_patient(
    name: &str,
    age: u8,
    gender: Gender,
    status: PatientStatus,
    insurance: &str,
    day: u32,
) -> DomainResult<Patient> {
    Patient::register(
        PatientId::new(),
        RegisterPatient {
            name: name.to_string(),
            age,
            gender,
            status,
            insurance_provider: insurance.to_string(),
            admission_date: october(day),
        },
    )
}

fn sample_inventory() -> DomainResult<Vec<InventoryItem>> {
    let catalogue = [
        ("Amoxicillin 500mg", ItemCategory::Medicine, 120, 15_00, 150, 45),
        ("Surgical Masks", ItemCategory::Consumable, 4_500, 50, 1_000, 500),
        ("Paracetamol IV", ItemCategory::Medicine, 40, 25_00, 50, 15),
        ("MRI Contrast Dye", ItemCategory::Consumable, 12, 200_00, 10, 4),
    ];

    catalogue
        .into_iter()
        .map(|(name, category, stock, price, reorder, usage)| {
            InventoryItem::create(
                InventoryItemId::new(),
                NewItem {
                    name: name.to_string(),
                    category,
                    current_stock: stock,
                    unit_price: price,
                    reorder_level: reorder,
                    last_usage_rate: usage,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_builds_cleanly() {
        let state = HospitalState::with_sample_data().unwrap();
        assert_eq!(state.patients().len(), 3);
        assert_eq!(state.inventory().len(), 4);
        assert_eq!(state.ledger().len(), 4);
    }

    #[test]
    fn sample_ledger_is_newest_first_and_totals_reconcile() {
        let state = HospitalState::with_sample_data().unwrap();
        let head = state.ledger().latest().unwrap();
        assert_eq!(head.description(), "Patient service payment");

        let totals = state.ledger().totals();
        assert_eq!(totals.revenue, 4_400_00);
        assert_eq!(totals.expense, 5_350_00);
        assert_eq!(totals.net(), -950_00);
    }

    #[test]
    fn sample_patients_are_newest_admission_first() {
        let state = HospitalState::with_sample_data().unwrap();
        let dates: Vec<_> = state.patients().iter().map(|p| p.admission_date()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }
}

//! The synchronizer: the rule coupling a domain event to its ledger effect.
//!
//! Every revenue- or expense-generating event produces exactly one ledger
//! entry, in the same call, with no manual step. These are the only two
//! mutation entry points on [`HospitalState`].

use chrono::NaiveDate;

use medius_accounting::{
    to_minor_units, FinancialTransaction, RecordTransaction, TransactionType,
};
use medius_ai::InvoiceData;
use medius_core::{DomainError, DomainResult, PatientId, TransactionId};
use medius_patients::{Patient, RegisterPatient};

use crate::state::HospitalState;

/// Flat registration fee collected on admission, in minor currency units.
pub const REGISTRATION_FEE: i64 = 150_00;

/// Revenue account for registration fees.
pub const REGISTRATION_FEE_ACCOUNT: &str = "4001";

/// Accounts-payable expense account for posted vendor invoices.
pub const ACCOUNTS_PAYABLE_ACCOUNT: &str = "5001";

/// Identifiers created by one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub patient_id: PatientId,
    pub transaction_id: TransactionId,
}

impl HospitalState {
    /// Register a patient and collect the registration fee.
    ///
    /// The pairing is unconditional: no registration without a fee, no fee
    /// without a registration. Both records are constructed before either
    /// collection is touched, so a rejection mutates nothing and a reader
    /// never observes a patient without its transaction. Both land at the
    /// head of their collections (newest first).
    pub fn register_patient(&mut self, cmd: RegisterPatient) -> DomainResult<RegistrationReceipt> {
        let registered_on = cmd.admission_date;
        let patient = Patient::register(PatientId::new(), cmd)?;
        let patient_id = patient.id_typed();

        let fee = FinancialTransaction::record(
            TransactionId::new(),
            RecordTransaction {
                date: registered_on,
                description: format!("Registration fee: {} ({})", patient.name(), patient_id),
                amount: REGISTRATION_FEE,
                kind: TransactionType::Revenue,
                account_code: REGISTRATION_FEE_ACCOUNT.to_string(),
                related_record: Some(patient_id.into()),
            },
        )?;
        let transaction_id = fee.id_typed();

        // Domain write precedes the ledger write, inside one `&mut` call.
        self.patients.insert(0, patient);
        self.ledger.post(fee);

        tracing::info!(%patient_id, %transaction_id, "patient registered, fee posted");
        Ok(RegistrationReceipt {
            patient_id,
            transaction_id,
        })
    }

    /// Post an extracted vendor invoice to the ledger as an expense.
    ///
    /// The invoice is taken as already parsed (nothing is re-extracted),
    /// but the total must convert to a positive amount. The entry is dated
    /// from the invoice when its date parses as `YYYY-MM-DD`, otherwise
    /// from `posted_on`.
    pub fn post_invoice(
        &mut self,
        invoice: &InvoiceData,
        posted_on: NaiveDate,
    ) -> DomainResult<TransactionId> {
        let amount = to_minor_units(invoice.total_amount)?;
        if amount <= 0 {
            return Err(DomainError::validation("invoice total must be positive"));
        }

        let date = invoice
            .invoice_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .unwrap_or(posted_on);

        let first_line = invoice
            .line_items
            .first()
            .map(|l| l.description.as_str())
            .unwrap_or("General");

        let txn = FinancialTransaction::record(
            TransactionId::new(),
            RecordTransaction {
                date,
                description: format!("Invoice: {} - {}", invoice.vendor_name, first_line),
                amount,
                kind: TransactionType::Expense,
                account_code: ACCOUNTS_PAYABLE_ACCOUNT.to_string(),
                related_record: None,
            },
        )?;
        let transaction_id = txn.id_typed();
        self.ledger.post(txn);

        tracing::info!(%transaction_id, vendor = %invoice.vendor_name, "invoice posted to ledger");
        Ok(transaction_id)
    }
}

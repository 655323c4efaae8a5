use chrono::NaiveDate;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medius_core::{DomainError, Entity, TransactionId};

/// High-level transaction kind (determines the ledger column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Revenue,
    Expense,
    Asset,
    Liability,
}

/// Which ledger column an amount is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    Debit,
    Credit,
}

impl TransactionType {
    /// Column mapping, total over the enum: every transaction lands in
    /// exactly one column.
    pub fn entry_side(self) -> EntrySide {
        match self {
            TransactionType::Expense | TransactionType::Asset => EntrySide::Debit,
            TransactionType::Revenue | TransactionType::Liability => EntrySide::Credit,
        }
    }
}

impl FromStr for TransactionType {
    type Err = DomainError;

    /// Closed set: unrecognized kinds are rejected instead of silently
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            other => Err(DomainError::validation(format!(
                "unknown transaction type: {other:?}"
            ))),
        }
    }
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            TransactionType::Revenue => "REVENUE",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Asset => "ASSET",
            TransactionType::Liability => "LIABILITY",
        };
        write!(f, "{s}")
    }
}

/// Convert a major-unit amount (as reported by an external system) into
/// minor units (cents), rounding half away from zero.
pub fn to_minor_units(major: f64) -> Result<i64, DomainError> {
    if !major.is_finite() {
        return Err(DomainError::validation("amount must be a finite number"));
    }
    let minor = (major * 100.0).round();
    if minor.abs() > i64::MAX as f64 {
        return Err(DomainError::validation("amount out of range"));
    }
    Ok(minor as i64)
}

/// Command: RecordTransaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTransaction {
    pub date: NaiveDate,
    pub description: String,
    /// Positive amount in smallest currency unit (e.g., cents).
    pub amount: i64,
    pub kind: TransactionType,
    pub account_code: String,
    /// Link back to the triggering record (patient, invoice, ...), if any.
    pub related_record: Option<Uuid>,
}

/// One ledger entry (immutable once recorded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialTransaction {
    id: TransactionId,
    date: NaiveDate,
    description: String,
    amount: i64,
    kind: TransactionType,
    account_code: String,
    related_record: Option<Uuid>,
}

impl FinancialTransaction {
    /// Validate a command and build the entry.
    ///
    /// Rejections: non-positive amount, blank description or account code.
    pub fn record(id: TransactionId, cmd: RecordTransaction) -> Result<Self, DomainError> {
        if cmd.amount <= 0 {
            return Err(DomainError::validation("amount must be positive"));
        }
        let description = cmd.description.trim();
        if description.is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        let account_code = cmd.account_code.trim();
        if account_code.is_empty() {
            return Err(DomainError::validation("account code cannot be empty"));
        }

        Ok(Self {
            id,
            date: cmd.date,
            description: description.to_string(),
            amount: cmd.amount,
            kind: cmd.kind,
            account_code: account_code.to_string(),
            related_record: cmd.related_record,
        })
    }

    pub fn id_typed(&self) -> TransactionId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn account_code(&self) -> &str {
        &self.account_code
    }

    pub fn related_record(&self) -> Option<Uuid> {
        self.related_record
    }

    pub fn entry_side(&self) -> EntrySide {
        self.kind.entry_side()
    }

    /// Amount shown in the debit column, if this entry debits.
    pub fn debit_amount(&self) -> Option<i64> {
        match self.entry_side() {
            EntrySide::Debit => Some(self.amount),
            EntrySide::Credit => None,
        }
    }

    /// Amount shown in the credit column, if this entry credits.
    pub fn credit_amount(&self) -> Option<i64> {
        match self.entry_side() {
            EntrySide::Credit => Some(self.amount),
            EntrySide::Debit => None,
        }
    }
}

impl Entity for FinancialTransaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }
}

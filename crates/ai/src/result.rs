//! Typed records parsed from model replies.
//!
//! These are transient, derived values: fully replaced on each gateway call,
//! never persisted, and not domain events.

use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// Per-item demand forecast.
///
/// Every field is required by the declared schema; a reply missing one fails
/// the whole parse rather than yielding a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub item_id: String,
    pub item_name: String,
    pub predicted_demand: f64,
    pub recommended_order: f64,
    pub reasoning: String,
}

/// Insight severity. Closed set; an unrecognized value fails the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One strategic insight over the recent transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResult {
    pub title: String,
    pub insight: String,
    pub actionable: String,
    pub severity: Severity,
}

/// One line of an extracted invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineItem {
    pub description: String,
    /// Major currency units as printed on the invoice.
    pub amount: f64,
}

/// Structured fields extracted from free-form invoice text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub vendor_name: String,
    /// As printed on the invoice; may be absent when the text carries none.
    #[serde(default)]
    pub invoice_date: Option<String>,
    /// Major currency units.
    pub total_amount: f64,
    #[serde(default)]
    pub line_items: Vec<InvoiceLineItem>,
    /// Extraction reliability estimate, in [0, 1].
    pub confidence: f64,
}

impl InvoiceData {
    /// Enforce the parts of the declared schema that JSON typing alone
    /// cannot: confidence must be a finite value in [0, 1].
    pub fn validated(self) -> Result<Self, AiError> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(AiError::SchemaViolation(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }
        Ok(self)
    }
}

//! The gateway: domain snapshot in, typed records out, failures degraded.

use serde::de::DeserializeOwned;

use crate::client::{GenerateRequest, GenerativeClient, DEFAULT_MODEL};
use crate::error::AiError;
use crate::prompt;
use crate::result::{ForecastResult, InsightResult, InvoiceData};
use crate::schema;
use crate::snapshot::{InventoryItemSnapshot, TransactionSnapshot};

/// Only this many of the most recent transactions are serialized into the
/// financial-analysis prompt, bounding its size.
pub const FINANCIAL_HISTORY_LIMIT: usize = 50;

/// Gateway from domain snapshots to the hosted generative model.
///
/// Operations are pure from the caller's perspective: no local state is
/// mutated, and any failure (transport, API status, empty reply, parse,
/// schema) is logged and degraded to an empty or absent result rather than
/// surfaced. Each call issues exactly one request, with no retry or
/// coalescing; dropping the returned future cancels the underlying request,
/// so a reply arriving after the initiating context is gone is never
/// observed.
pub struct AiGateway<C> {
    client: C,
    model: String,
}

impl<C: GenerativeClient> AiGateway<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The underlying client (useful for inspecting a scripted mock).
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Predict next-month demand and a recommended order per inventory item.
    ///
    /// Empty on any failure. A reply item missing a required field fails the
    /// whole parse; there are no partial results.
    pub async fn forecast_inventory(
        &self,
        items: &[InventoryItemSnapshot],
    ) -> Vec<ForecastResult> {
        match self.try_forecast(items).await {
            Ok(results) => results,
            Err(error) => {
                tracing::warn!(%error, "inventory forecast failed");
                Vec::new()
            }
        }
    }

    /// Produce strategic insights over the most recent transactions.
    ///
    /// The history is truncated to [`FINANCIAL_HISTORY_LIMIT`] entries
    /// (input is newest-first) before serializing. Empty on any failure.
    pub async fn analyze_financials(
        &self,
        transactions: &[TransactionSnapshot],
    ) -> Vec<InsightResult> {
        match self.try_analyze(transactions).await {
            Ok(results) => results,
            Err(error) => {
                tracing::warn!(%error, "financial analysis failed");
                Vec::new()
            }
        }
    }

    /// Extract structured invoice fields from free-form text.
    ///
    /// `None` (not an empty record) on any failure, so the caller can tell
    /// "nothing to show" from a zero-confidence extraction.
    pub async fn extract_invoice(&self, raw_text: &str) -> Option<InvoiceData> {
        match self.try_extract(raw_text).await {
            Ok(invoice) => Some(invoice),
            Err(error) => {
                tracing::warn!(%error, "invoice extraction failed");
                None
            }
        }
    }

    async fn try_forecast(
        &self,
        items: &[InventoryItemSnapshot],
    ) -> Result<Vec<ForecastResult>, AiError> {
        let prompt = prompt::forecast_prompt(items)?;
        let schema = schema::forecast_schema();
        let text = self
            .client
            .generate_json(GenerateRequest {
                model: &self.model,
                prompt: &prompt,
                response_schema: &schema,
            })
            .await?;
        parse_reply(&text)
    }

    async fn try_analyze(
        &self,
        transactions: &[TransactionSnapshot],
    ) -> Result<Vec<InsightResult>, AiError> {
        let recent = &transactions[..transactions.len().min(FINANCIAL_HISTORY_LIMIT)];
        let prompt = prompt::insights_prompt(recent)?;
        let schema = schema::insights_schema();
        let text = self
            .client
            .generate_json(GenerateRequest {
                model: &self.model,
                prompt: &prompt,
                response_schema: &schema,
            })
            .await?;
        parse_reply(&text)
    }

    async fn try_extract(&self, raw_text: &str) -> Result<InvoiceData, AiError> {
        let prompt = prompt::invoice_prompt(raw_text);
        let schema = schema::invoice_schema();
        let text = self
            .client
            .generate_json(GenerateRequest {
                model: &self.model,
                prompt: &prompt,
                response_schema: &schema,
            })
            .await?;
        let invoice: InvoiceData = parse_reply(&text)?;
        invoice.validated()
    }
}

fn parse_reply<T: DeserializeOwned>(text: &str) -> Result<T, AiError> {
    serde_json::from_str(strip_code_fences(text))
        .map_err(|e| AiError::MalformedReply(e.to_string()))
}

/// Models occasionally wrap the JSON in a Markdown fence even when asked for
/// bare JSON; tolerate that one deviation.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    match rest.trim_end().strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}

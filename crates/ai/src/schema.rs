//! Declared structured-output schemas, one per gateway operation.
//!
//! The schema is sent alongside the prompt so the reply can be parsed
//! deterministically instead of scraped out of free text. The dialect is
//! the hosted endpoint's (`ARRAY`/`OBJECT`/`STRING`/`NUMBER` type tags).

use serde_json::{json, Value as JsonValue};

/// Array of per-item forecasts; every field required.
pub fn forecast_schema() -> JsonValue {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "itemId": { "type": "STRING" },
                "itemName": { "type": "STRING" },
                "predictedDemand": { "type": "NUMBER" },
                "recommendedOrder": { "type": "NUMBER" },
                "reasoning": { "type": "STRING" }
            },
            "required": ["itemId", "itemName", "predictedDemand", "recommendedOrder", "reasoning"]
        }
    })
}

/// Array of strategic insights; severity constrained to the closed set.
pub fn insights_schema() -> JsonValue {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "insight": { "type": "STRING" },
                "actionable": { "type": "STRING" },
                "severity": { "type": "STRING", "enum": ["low", "medium", "high"] }
            },
            "required": ["title", "insight", "actionable", "severity"]
        }
    })
}

/// Single extracted invoice. `invoiceDate` is deliberately not required:
/// absence is meaningful (the poster falls back to the posting date).
pub fn invoice_schema() -> JsonValue {
    json!({
        "type": "OBJECT",
        "properties": {
            "vendorName": { "type": "STRING" },
            "invoiceDate": { "type": "STRING" },
            "totalAmount": { "type": "NUMBER" },
            "lineItems": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "description": { "type": "STRING" },
                        "amount": { "type": "NUMBER" }
                    },
                    "required": ["description", "amount"]
                }
            },
            "confidence": { "type": "NUMBER", "description": "0 to 1 confidence score" }
        },
        "required": ["vendorName", "totalAmount", "lineItems", "confidence"]
    })
}

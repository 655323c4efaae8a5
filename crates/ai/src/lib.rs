//! `medius-ai`
//!
//! **Responsibility:** gateway between domain snapshots and a hosted
//! generative model.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on the domain crates (callers map their records into
//!   the snapshot types defined here).
//! - It must not mutate domain state.
//! - It emits transient, derived records (forecasts, insights, extracted
//!   invoices), not domain events.
//!
//! Every operation degrades to an empty or absent result on failure; no
//! model failure ever reaches the caller as an error.

pub mod client;
pub mod error;
pub mod gateway;
pub mod prompt;
pub mod result;
pub mod schema;
pub mod snapshot;

pub use client::{
    GeminiClient, GenerateRequest, GenerativeClient, MockGenerativeClient, RecordedRequest,
    DEFAULT_MODEL,
};
pub use error::AiError;
pub use gateway::AiGateway;
pub use result::{ForecastResult, InsightResult, InvoiceData, InvoiceLineItem, Severity};
pub use snapshot::{InventoryItemSnapshot, TransactionSnapshot};

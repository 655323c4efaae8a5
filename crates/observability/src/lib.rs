//! `medius-observability`
//!
//! Process-wide logging setup for applications embedding the Medius crates.
//! Library code only emits `tracing` events; whoever owns `main` (or a test
//! harness) decides how they are rendered by calling [`init`].

pub mod tracing;

pub use crate::tracing::init;

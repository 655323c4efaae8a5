//! Patient administration domain module.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns.

pub mod patient;

pub use patient::{Gender, Patient, PatientStatus, RegisterPatient};

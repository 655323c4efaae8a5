//! `medius-app` — application state and the ledger synchronizer.
//!
//! Holds the process-wide [`HospitalState`] (patients, pharmacy inventory,
//! general ledger) and funnels every mutation through the two synchronizer
//! entry points, so the registration/fee pairing invariant cannot be
//! bypassed. Read access is by snapshot only.

pub mod seed;
pub mod snapshots;
pub mod state;
pub mod synchronizer;

pub use state::HospitalState;
pub use synchronizer::{
    RegistrationReceipt, ACCOUNTS_PAYABLE_ACCOUNT, REGISTRATION_FEE, REGISTRATION_FEE_ACCOUNT,
};

//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Implemented by domain records that are looked up by identity rather than
/// by value (patients, inventory items, ledger transactions).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

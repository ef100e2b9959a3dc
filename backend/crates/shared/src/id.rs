//! Common ID Types
//!
//! Type-safe integer ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper over a positive 64-bit integer
///
/// Ids are minted by the application, never by the database, so a store
/// can be swapped without changing how identities are assigned.
///
/// Usage:
/// ```
/// use kernel::id::Id;
/// struct Account;
/// type AccountId = Id<Account>;
///
/// let id = AccountId::generate();
/// assert!(id.get() > 0);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Mint a fresh random ID from UUIDv4 randomness
    ///
    /// The top bit is cleared so the value always fits a signed `BIGINT`
    /// column and stays positive.
    pub fn generate() -> Self {
        let bytes = Uuid::new_v4().into_bytes();
        let mut high = [0u8; 8];
        high.copy_from_slice(&bytes[..8]);
        let value = (u64::from_be_bytes(high) >> 1) as i64;
        Self::from_i64(value.max(1))
    }

    /// Wrap an existing integer (e.g. read back from the database)
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub const fn get(&self) -> i64 {
        self.value
    }
}

// Manual impls so `T` (a marker) does not need to implement these traits.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;
    struct Gadget;

    #[test]
    fn test_generated_ids_are_positive() {
        for _ in 0..1_000 {
            let id: Id<Widget> = Id::generate();
            assert!(id.get() > 0);
        }
    }

    #[test]
    fn test_generated_ids_differ() {
        let a: Id<Widget> = Id::generate();
        let b: Id<Widget> = Id::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_i64_roundtrip() {
        let id: Id<Gadget> = Id::from_i64(42);
        assert_eq!(id.get(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.to_string(), "42");
    }
}

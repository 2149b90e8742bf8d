//! Value Objects for the storefront

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use uuid::Uuid;

/// Opaque product identifier, unique within a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self { Self(value.into()) }
    pub fn generate() -> Self { Self(Uuid::new_v4().to_string()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self { Self::new(value) }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool { self.0 == other }
}

/// Cart line quantity. Never zero; a line that would reach zero is dropped instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// `None` for anything below one. Values above `u32::MAX` saturate.
    pub fn from_signed(value: i64) -> Option<Self> {
        if value <= 0 { return None; }
        let clamped = u32::try_from(value).unwrap_or(u32::MAX);
        NonZeroU32::new(clamped).map(Self)
    }
    pub fn get(&self) -> u32 { self.0.get() }
    pub fn capped(self, cap: u32) -> Option<Self> { NonZeroU32::new(self.get().min(cap)).map(Self) }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() { assert_ne!(ProductId::generate(), ProductId::generate()); }

    #[test]
    fn test_quantity_rejects_non_positive() {
        assert!(Quantity::from_signed(0).is_none());
        assert!(Quantity::from_signed(-3).is_none());
        assert_eq!(Quantity::from_signed(4).unwrap().get(), 4);
        assert_eq!(Quantity::from_signed(i64::MAX).unwrap().get(), u32::MAX);
    }

    #[test]
    fn test_quantity_cap() {
        let q = Quantity::from_signed(9).unwrap();
        assert_eq!(q.capped(5).unwrap().get(), 5);
        assert!(q.capped(0).is_none());
    }

    #[test]
    fn test_quantity_zero_is_not_deserializable() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert_eq!(serde_json::from_str::<Quantity>("2").unwrap().get(), 2);
    }
}

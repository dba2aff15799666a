//! Order identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A generated order identifier.
///
/// Order IDs are assigned at checkout and carry an `ORD` prefix followed
/// by digits. Lookups are case-insensitive: [`OrderId::normalized`] trims
/// the input and uppercases it, so `"ord123"` and `" ORD123 "` both refer
/// to the same order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wrap an already-canonical order id, as produced by the generator.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Normalize caller-supplied input for lookup: trim and uppercase.
    #[must_use]
    pub fn normalized(input: &str) -> Self {
        Self(input.trim().to_uppercase())
    }

    /// Returns the order id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OrderId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Session identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`SessionId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SessionIdError {
    /// The input string is empty or whitespace-only.
    #[error("sessionId is required")]
    Blank,
}

/// An opaque caller-supplied session token.
///
/// Sessions are not authenticated; the token only scopes cart, wishlist,
/// and order visibility. Parsing trims surrounding whitespace and rejects
/// blank input, so a `SessionId` is always non-empty.
///
/// ## Examples
///
/// ```
/// use clementine_core::SessionId;
///
/// let session = SessionId::parse("  shopper-1  ").expect("valid session");
/// assert_eq!(session.as_str(), "shopper-1");
///
/// assert!(SessionId::parse("").is_err());
/// assert!(SessionId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Parse a `SessionId` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SessionIdError::Blank`] if the input is empty after trimming.
    pub fn parse(s: &str) -> Result<Self, SessionIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SessionIdError::Blank);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the session token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `SessionId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

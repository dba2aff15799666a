//! Core types for Clementine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod session;

pub use id::*;
pub use order::OrderId;
pub use session::{SessionId, SessionIdError};

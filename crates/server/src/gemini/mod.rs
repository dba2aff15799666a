//! Gemini API client for the chat assistant.
//!
//! The rest of the system only needs one capability from this module:
//! generate a reply given a prompt string, failing if the service is
//! unavailable or returns nothing usable.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;

//! Clementine Core - Shared types library.
//!
//! This crate provides the domain types shared by every Clementine
//! component. It contains only types and traits - no I/O, no HTTP
//! clients - which keeps it lightweight and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and session tokens

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

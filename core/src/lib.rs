//! # OTM Core
//!
//! Core types and containers for OTM-style dictionaries.
pub mod dictionary;
pub mod error;
pub mod types;

// Re-exports
pub use error::{Error, Result};

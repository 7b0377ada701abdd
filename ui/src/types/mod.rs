//! Common types.
pub mod keyed;

// Re-exports
pub use keyed::{ItemKey, Keyed, KeyedList};

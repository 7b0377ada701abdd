//! Common types.
pub mod entry_id;

pub use entry_id::EntryId;

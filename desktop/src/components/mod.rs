//! UI Components
pub mod entry_selector;

// Re-exports
pub use entry_selector::EntrySelector;

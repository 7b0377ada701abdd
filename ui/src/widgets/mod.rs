//! UI Widgets
pub mod word;

// Re-exports
pub use word::{PropEditor, WordEditor};

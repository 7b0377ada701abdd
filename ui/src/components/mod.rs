//! UI Components
pub mod dialog;

// Re-exports
pub use dialog::Prompter;

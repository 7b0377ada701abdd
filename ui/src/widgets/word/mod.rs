//! Word editing widgets.
pub mod prop_editor;
pub mod state;
pub mod word_editor;

// Re-exports
pub use prop_editor::PropEditor;
pub use state::{RelationDraft, TranslationDraft, WordState};
pub use word_editor::WordEditor;

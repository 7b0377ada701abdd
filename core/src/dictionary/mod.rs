//! Dictionary resources.
pub mod content;
pub mod entry;
pub mod lexicon;
pub mod relation;
pub mod translation;
pub mod variation;
pub mod word;

/// Classification label attached to a word.
pub type Tag = String;

// Re-exports
pub use content::Content;
pub use entry::Entry;
pub use lexicon::Lexicon;
pub use relation::Relation;
pub use translation::Translation;
pub use variation::Variation;
pub use word::Word;

//! Word records.
use super::{Content, Entry, Relation, Tag, Translation, Variation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full editable record of a dictionary item.
/// Insertion order of every collection is significant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub entry: Entry,
    pub translations: Vec<Translation>,
    pub tags: Vec<Tag>,
    pub contents: Vec<Content>,
    pub variations: Vec<Variation>,
    pub relations: Vec<Relation>,
}

impl Word {
    /// Creates an empty word with a fresh id.
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            entry: Entry::new(form),
            translations: Vec::new(),
            tags: Vec::new(),
            contents: Vec::new(),
            variations: Vec::new(),
            relations: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "./word_test.rs"]
mod word_test;

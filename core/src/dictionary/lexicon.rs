//! Word collections.
use super::{Entry, Word};
use crate::error::{Error, Result};
use crate::types::EntryId;
use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Insertion-ordered collection of words keyed by entry id.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lexicon {
    words: IndexMap<EntryId, Word>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            words: IndexMap::new(),
        }
    }

    /// Adds a word.
    ///
    /// # Errors
    /// + [`Error::DuplicateId`] if a word with the same entry id is already
    /// present.
    pub fn insert(&mut self, word: Word) -> Result {
        let id = word.entry.id.clone();
        if self.words.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }

        self.words.insert(id, word);
        Ok(())
    }

    /// Replaces an existing word, matched by entry id.
    ///
    /// # Errors
    /// + [`Error::NotFound`] if no word with that id is present.
    pub fn update(&mut self, word: Word) -> Result {
        let id = word.entry.id.clone();
        if !self.words.contains_key(&id) {
            return Err(Error::NotFound(id));
        }

        self.words.insert(id, word);
        Ok(())
    }

    /// Removes a word, preserving the order of the rest.
    ///
    /// # Errors
    /// + [`Error::NotFound`] if no word with that id is present.
    pub fn remove(&mut self, id: &EntryId) -> Result<Word> {
        self.words
            .shift_remove(id)
            .ok_or_else(|| Error::NotFound(id.clone()))
    }

    pub fn get(&self, id: &EntryId) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn get_mut(&mut self, id: &EntryId) -> Option<&mut Word> {
        self.words.get_mut(id)
    }

    /// Entries of all words, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.words.values().map(|word| &word.entry)
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
#[path = "./lexicon_test.rs"]
mod lexicon_test;

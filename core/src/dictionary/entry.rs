//! Headword identity of a word.
use crate::types::EntryId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Headword identity of a dictionary item.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,

    /// Surface form of the headword.
    pub form: String,
}

impl Entry {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            form: form.into(),
        }
    }
}

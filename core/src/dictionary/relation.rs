//! Cross-references between words.
use super::Entry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named cross-reference to another entry.
/// A relation always points at a resolved entry; draft relations without a
/// target live only in editor state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub title: String,
    pub entry: Entry,
}

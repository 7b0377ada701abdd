//! Free-text content blocks.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Titled block of free text attached to a word.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    pub title: String,
    pub text: String,
}

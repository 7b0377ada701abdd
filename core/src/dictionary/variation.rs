//! Inflection variations.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Titled inflected form of a word.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Variation {
    pub title: String,
    pub form: String,
}

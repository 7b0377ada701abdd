//! Translations of a word.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Titled group of translated surface forms.
/// Order of `forms` is significant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    pub title: String,
    pub forms: Vec<String>,
}

impl Translation {
    pub fn new(title: impl Into<String>, forms: Vec<impl Into<String>>) -> Self {
        Self {
            title: title.into(),
            forms: forms.into_iter().map(|form| form.into()).collect(),
        }
    }
}

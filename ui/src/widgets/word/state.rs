//! Editing state for a single word.
use crate::types::keyed::{self, KeyedList};
use otm_core::dictionary::{Content, Entry, Relation, Tag, Translation, Variation, Word};
use otm_core::types::EntryId;
use std::rc::Rc;
use yew::prelude::*;

// **************
// *** Drafts ***
// **************

/// Translation reshaped for textarea editing.
/// `forms` holds the surface forms joined with newlines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationDraft {
    pub title: String,
    pub forms: String,
}

impl From<&Translation> for TranslationDraft {
    fn from(translation: &Translation) -> Self {
        Self {
            title: translation.title.clone(),
            forms: translation.forms.join("\n"),
        }
    }
}

impl TranslationDraft {
    /// Splits the newline-joined forms back into a list, dropping blank and
    /// whitespace-only lines.
    pub fn build(&self) -> Translation {
        Translation {
            title: self.title.clone(),
            forms: self
                .forms
                .split('\n')
                .filter(|form| !form.trim().is_empty())
                .map(|form| form.to_string())
                .collect(),
        }
    }
}

/// Relation whose target entry may not be resolved yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationDraft {
    pub title: String,
    pub entry: Option<Entry>,
}

impl From<&Relation> for RelationDraft {
    fn from(relation: &Relation) -> Self {
        Self {
            title: relation.title.clone(),
            entry: Some(relation.entry.clone()),
        }
    }
}

impl RelationDraft {
    /// `None` when the target entry is unresolved.
    pub fn build(&self) -> Option<Relation> {
        self.entry.clone().map(|entry| Relation {
            title: self.title.clone(),
            entry,
        })
    }
}

// ******************
// *** Word State ***
// ******************

pub enum WordStateAction {
    SetForm(String),
    SetTranslations(KeyedList<TranslationDraft>),
    SetTags(KeyedList<Tag>),
    SetContents(KeyedList<Content>),
    SetVariations(KeyedList<Variation>),
    SetRelations(KeyedList<RelationDraft>),
}

/// Editable state of a word, decomposed into the headword scalar and five
/// independently edited keyed lists.
#[derive(Debug, Clone, PartialEq)]
pub struct WordState {
    pub form: String,
    pub translations: KeyedList<TranslationDraft>,
    pub tags: KeyedList<Tag>,
    pub contents: KeyedList<Content>,
    pub variations: KeyedList<Variation>,
    pub relations: KeyedList<RelationDraft>,
}

impl WordState {
    /// Copies a word into editable shape. The word itself is never mutated.
    pub fn from_word(word: &Word) -> Self {
        Self {
            form: word.entry.form.clone(),
            translations: keyed::keyed(
                word.translations.iter().map(TranslationDraft::from).collect(),
            ),
            tags: keyed::keyed(word.tags.clone()),
            contents: keyed::keyed(word.contents.clone()),
            variations: keyed::keyed(word.variations.clone()),
            relations: keyed::keyed(word.relations.iter().map(RelationDraft::from).collect()),
        }
    }

    /// Rebuilds the storage shape of the word.
    ///
    /// Keys are stripped, translation forms are re-split with blank lines
    /// discarded, and relations without a resolved target are dropped.
    pub fn build_word(&self, id: &EntryId) -> Word {
        Word {
            entry: Entry {
                id: id.clone(),
                form: self.form.clone(),
            },
            translations: self
                .translations
                .iter()
                .map(|translation| translation.value.build())
                .collect(),
            tags: keyed::unkeyed(&self.tags),
            contents: keyed::unkeyed(&self.contents),
            variations: keyed::unkeyed(&self.variations),
            relations: self
                .relations
                .iter()
                .filter_map(|relation| relation.value.build())
                .collect(),
        }
    }
}

impl Reducible for WordState {
    type Action = WordStateAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut current = (*self).clone();

        match action {
            WordStateAction::SetForm(form) => {
                current.form = form;
            }
            WordStateAction::SetTranslations(translations) => {
                current.translations = translations;
            }
            WordStateAction::SetTags(tags) => {
                current.tags = tags;
            }
            WordStateAction::SetContents(contents) => {
                current.contents = contents;
            }
            WordStateAction::SetVariations(variations) => {
                current.variations = variations;
            }
            WordStateAction::SetRelations(relations) => {
                current.relations = relations;
            }
        }

        current.into()
    }
}

#[cfg(test)]
#[path = "./state_test.rs"]
mod state_test;

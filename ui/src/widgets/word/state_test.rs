use super::*;
use crate::types::keyed::Keyed;

#[test]
fn from_word_should_join_translation_forms() {
    let word = create_word();
    let state = WordState::from_word(&word);

    assert_eq!(word.entry.form, state.form);
    assert_eq!(1, state.translations.len());
    assert_eq!("en", state.translations[0].value.title);
    assert_eq!("cat\ncats", state.translations[0].value.forms);
}

#[test]
fn build_word_should_round_trip_without_edits() {
    let word = create_word();
    let state = WordState::from_word(&word);

    assert_eq!(word, state.build_word(&word.entry.id));
}

#[test]
fn build_word_should_drop_blank_translation_forms() {
    let word = create_word();
    let mut state = WordState::from_word(&word);
    state.translations[0].value.forms = "cat\ncats\n\n".to_string();

    let built = state.build_word(&word.entry.id);
    assert_eq!(vec!["cat", "cats"], built.translations[0].forms);
}

#[test]
fn build_word_should_drop_unresolved_relations() {
    let word = create_word();
    let mut state = WordState::from_word(&word);
    state.relations.push(Keyed::new(RelationDraft {
        title: "synonym".to_string(),
        entry: None,
    }));

    let built = state.build_word(&word.entry.id);
    assert_eq!(
        word.relations, built.relations,
        "unresolved relation should be omitted"
    );
}

#[test]
fn build_word_should_apply_field_edits() {
    let word = create_word();
    let mut state = WordState::from_word(&word);
    state.form = "feline".to_string();
    state.tags[0].value = "archaic".to_string();

    let built = state.build_word(&word.entry.id);
    assert_eq!(word.entry.id, built.entry.id, "id should be preserved");
    assert_eq!("feline", built.entry.form);
    assert_eq!(vec!["archaic".to_string(), "noun".to_string()], built.tags);
}

// ***************
// *** helpers ***
// ***************

fn create_word() -> Word {
    let mut word = Word::new("cat");
    word.translations = vec![Translation::new("en", vec!["cat", "cats"])];
    word.tags = vec!["animal".to_string(), "noun".to_string()];
    word.contents = vec![Content {
        title: "etymology".to_string(),
        text: "from kattos".to_string(),
    }];
    word.variations = vec![Variation {
        title: "plural".to_string(),
        form: "cats".to_string(),
    }];
    word.relations = vec![Relation {
        title: "synonym".to_string(),
        entry: Entry::new("feline"),
    }];

    word
}

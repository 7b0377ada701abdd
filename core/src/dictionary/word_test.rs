use super::*;

#[test]
fn new_should_start_empty() {
    let word = Word::new("cat");

    assert_eq!("cat", word.entry.form);
    assert!(word.translations.is_empty());
    assert!(word.tags.is_empty());
    assert!(word.contents.is_empty());
    assert!(word.variations.is_empty());
    assert!(word.relations.is_empty());
}

#[test]
fn new_should_assign_fresh_ids() {
    let a = Word::new("cat");
    let b = Word::new("cat");

    assert_ne!(a.entry.id, b.entry.id, "ids should be unique");
}

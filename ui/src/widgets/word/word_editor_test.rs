use super::*;
use otm_core::dictionary::{Relation, Translation};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn commit_save_should_skip_an_unchanged_word() {
    let word = create_word();
    let candidate = WordState::from_word(&word).build_word(&word.entry.id);

    let saved = commit_save(&word, candidate, &silent_prompter());
    assert_eq!(None, saved, "unchanged word should not be saved");
}

#[test]
fn commit_save_should_notify_once_and_return_the_candidate() {
    static ALERTS: AtomicUsize = AtomicUsize::new(0);
    fn count_alert(_: &str) {
        ALERTS.fetch_add(1, Ordering::SeqCst);
    }

    let word = create_word();
    let mut state = WordState::from_word(&word);
    state.form = "feline".to_string();
    let candidate = state.build_word(&word.entry.id);

    let prompter = Prompter::new(confirm_unreachable, count_alert);
    let saved = commit_save(&word, candidate.clone(), &prompter);

    assert_eq!(Some(candidate), saved);
    assert_eq!(1, ALERTS.load(Ordering::SeqCst), "user should be notified once");
}

#[test]
fn commit_cancel_should_not_ask_when_unchanged() {
    let word = create_word();
    let candidate = WordState::from_word(&word).build_word(&word.entry.id);

    assert!(commit_cancel(&word, &candidate, &silent_prompter()));
}

#[test]
fn commit_cancel_should_follow_the_users_answer() {
    let word = create_word();
    let mut state = WordState::from_word(&word);
    state.form = "feline".to_string();
    let candidate = state.build_word(&word.entry.id);

    let prompter = Prompter::new(confirm_yes, alert_unreachable);
    assert!(
        commit_cancel(&word, &candidate, &prompter),
        "confirmed discard should dismiss the editor"
    );

    let prompter = Prompter::new(confirm_no, alert_unreachable);
    assert!(
        !commit_cancel(&word, &candidate, &prompter),
        "declined discard should keep the editor open"
    );
}

#[test]
fn drafted_relation_without_a_target_should_not_trigger_a_save() {
    // Adding a relation that never resolves an entry rebuilds to the
    // original word, so save stays a no-op.
    let word = create_word();
    let mut state = WordState::from_word(&word);
    state.relations = crate::types::keyed::push_default(
        &state.relations,
        &RelationDraft {
            title: "synonym".to_string(),
            entry: None,
        },
    );

    let candidate = state.build_word(&word.entry.id);
    assert_eq!(None, commit_save(&word, candidate, &silent_prompter()));
}

// ***************
// *** helpers ***
// ***************

fn create_word() -> Word {
    let mut word = Word::new("cat");
    word.translations = vec![Translation::new("en", vec!["cat", "cats"])];
    word.tags = vec!["animal".to_string()];
    word.relations = vec![Relation {
        title: "antonym".to_string(),
        entry: Entry::new("dog"),
    }];

    word
}

/// Prompter that fails the test if any dialog is shown.
fn silent_prompter() -> Prompter {
    Prompter::new(confirm_unreachable, alert_unreachable)
}

fn confirm_yes(_: &str) -> bool {
    true
}

fn confirm_no(_: &str) -> bool {
    false
}

fn confirm_unreachable(_: &str) -> bool {
    unreachable!("confirm should not be asked");
}

fn alert_unreachable(_: &str) {
    unreachable!("alert should not be shown");
}

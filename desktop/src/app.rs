//! Demonstration host for the word editor.
use crate::components::EntrySelector;
use otm_core::dictionary::{Content, Entry, Lexicon, Relation, Translation, Variation, Word};
use otm_core::types::EntryId;
use otm_ui::widgets::word::WordEditor;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let lexicon = use_state(create_lexicon);
    let active: UseStateHandle<Option<EntryId>> = use_state(|| None);

    // Responder of a pending relation target selection.
    // `Some` while the entry selector overlay is open.
    let pending_select: UseStateHandle<Option<Callback<Option<Entry>>>> = use_state(|| None);

    let edit = {
        let active = active.clone();

        move |id: EntryId| {
            let active = active.clone();

            Callback::from(move |_: MouseEvent| {
                active.set(Some(id.clone()));
            })
        }
    };

    let delete = {
        let lexicon = lexicon.clone();
        let active = active.clone();

        move |id: EntryId| {
            let lexicon = lexicon.clone();
            let active = active.clone();

            Callback::from(move |_: MouseEvent| {
                let mut updated = (*lexicon).clone();
                if let Err(err) = updated.remove(&id) {
                    tracing::error!(?err, "could not remove word");
                    return;
                }

                if *active == Some(id.clone()) {
                    active.set(None);
                }
                lexicon.set(updated);
            })
        }
    };

    let onedit = {
        let lexicon = lexicon.clone();
        let active = active.clone();

        Callback::from(move |word: Word| {
            let mut updated = (*lexicon).clone();
            if let Err(err) = updated.update(word) {
                tracing::error!(?err, "could not store edited word");
                return;
            }

            lexicon.set(updated);
            active.set(None);
        })
    };

    let oncancel = {
        let active = active.clone();

        Callback::from(move |_: ()| {
            active.set(None);
        })
    };

    let onremove = {
        let lexicon = lexicon.clone();
        let active = active.clone();

        Callback::from(move |_: ()| {
            let Some(id) = (*active).clone() else {
                return;
            };

            let mut updated = (*lexicon).clone();
            if updated.remove(&id).is_ok() {
                lexicon.set(updated);
            }
            active.set(None);
        })
    };

    let onselect = {
        let pending_select = pending_select.clone();

        Callback::from(move |reply: Callback<Option<Entry>>| {
            pending_select.set(Some(reply));
        })
    };

    let onpick = {
        let pending_select = pending_select.clone();

        Callback::from(move |entry: Option<Entry>| {
            if let Some(reply) = (*pending_select).clone() {
                reply.emit(entry);
            }
            pending_select.set(None);
        })
    };

    let editor = (*active).clone().and_then(|id| {
        lexicon.get(&id).map(|word| {
            html! {
                <WordEditor
                    word={word.clone()}
                    {onedit}
                    {oncancel}
                    {onremove}
                    {onselect} />
            }
        })
    });

    html! {
        <main>
            <h1>{ "Dictionary" }</h1>
            <ul class={classes!("word-list")}>
                { lexicon.words().map(|word| html! {
                    <li key={word.entry.id.to_string()}>
                        <span>{ &word.entry.form }</span>
                        <button onclick={edit(word.entry.id.clone())}>{ "Edit" }</button>
                        <button onclick={delete(word.entry.id.clone())}>{ "Delete" }</button>
                    </li>
                }).collect::<Html>() }
            </ul>

            { editor }

            if pending_select.is_some() {
                <EntrySelector
                    entries={lexicon.entries().cloned().collect::<Vec<Entry>>()}
                    onpick={onpick} />
            }
        </main>
    }
}

// ***************
// *** helpers ***
// ***************

fn create_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new();

    let mut cat = Word::new("cat");
    cat.translations = vec![Translation::new("noun", vec!["cat", "feline"])];
    cat.tags = vec!["animal".to_string()];
    cat.contents = vec![Content {
        title: "etymology".to_string(),
        text: "From Late Latin cattus.".to_string(),
    }];
    cat.variations = vec![Variation {
        title: "plural".to_string(),
        form: "cats".to_string(),
    }];

    let mut dog = Word::new("dog");
    dog.translations = vec![Translation::new("noun", vec!["dog", "canine"])];
    dog.tags = vec!["animal".to_string()];
    dog.relations = vec![Relation {
        title: "see also".to_string(),
        entry: cat.entry.clone(),
    }];

    lexicon.insert(cat).expect("lexicon should accept seed words");
    lexicon.insert(dog).expect("lexicon should accept seed words");
    lexicon
}

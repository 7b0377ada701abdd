//! Editor for a single word.
use super::prop_editor::PropEditor;
use super::state::{RelationDraft, TranslationDraft, WordState, WordStateAction};
use crate::components::dialog::Prompter;
use otm_core::dictionary::{Content, Entry, Tag, Variation, Word};
use yew::prelude::*;

const MSG_SAVED: &str = "Changes applied.";
const MSG_DISCARD: &str = "Closing discards your changes. Close anyway?";

// ********************
// *** Exit Actions ***
// ********************

/// Decides a save action.
///
/// Returns the candidate to hand to `onedit`, or `None` when it is
/// structurally equal to the original. The user is notified only when a
/// save goes through.
pub(crate) fn commit_save(original: &Word, candidate: Word, prompter: &Prompter) -> Option<Word> {
    if candidate == *original {
        return None;
    }

    prompter.alert(MSG_SAVED);
    Some(candidate)
}

/// Decides a cancel action. `true` means dismiss the editor.
/// Unsaved changes are discarded only after the user confirms.
pub(crate) fn commit_cancel(original: &Word, candidate: &Word, prompter: &Prompter) -> bool {
    *candidate == *original || prompter.confirm(MSG_DISCARD)
}

// ************************
// *** Editor Component ***
// ************************

/// Properties for [`WordEditor`].
#[derive(Properties, PartialEq, Debug)]
pub struct WordEditorProps {
    /// Word to edit. Read once, when the editor mounts; never mutated.
    pub word: Word,

    /// Callback with the rebuilt word on save.
    /// Fires only when the word actually changed.
    pub onedit: Callback<Word>,

    /// Callback when the editor is dismissed.
    pub oncancel: Callback<()>,

    /// Pass-through for hosts that wire a word delete control elsewhere.
    /// No control inside the editor triggers it.
    #[prop_or_default]
    pub onremove: Callback<()>,

    /// Entry selection collaborator for relation targets.
    /// The host resolves the given callback with the chosen entry, or
    /// `None` if selection was aborted.
    pub onselect: Callback<Callback<Option<Entry>>>,

    #[prop_or_default]
    pub prompter: Prompter,
}

/// Form-based editor for one word record.
#[tracing::instrument]
#[function_component(WordEditor)]
pub fn word_editor(props: &WordEditorProps) -> Html {
    let state = use_reducer(|| WordState::from_word(&props.word));

    let onchange_form = {
        let state = state.clone();

        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.dispatch(WordStateAction::SetForm(input.value()));
        })
    };

    let onchange_translations = {
        let state = state.clone();

        Callback::from(move |translations| {
            state.dispatch(WordStateAction::SetTranslations(translations));
        })
    };

    let onchange_tags = {
        let state = state.clone();

        Callback::from(move |tags| {
            state.dispatch(WordStateAction::SetTags(tags));
        })
    };

    let onchange_contents = {
        let state = state.clone();

        Callback::from(move |contents| {
            state.dispatch(WordStateAction::SetContents(contents));
        })
    };

    let onchange_variations = {
        let state = state.clone();

        Callback::from(move |variations| {
            state.dispatch(WordStateAction::SetVariations(variations));
        })
    };

    let onchange_relations = {
        let state = state.clone();

        Callback::from(move |relations| {
            state.dispatch(WordStateAction::SetRelations(relations));
        })
    };

    let onsave = {
        let state = state.clone();
        let word = props.word.clone();
        let onedit = props.onedit.clone();
        let prompter = props.prompter;

        Callback::from(move |_: MouseEvent| {
            let candidate = state.build_word(&word.entry.id);
            if let Some(candidate) = commit_save(&word, candidate, &prompter) {
                tracing::debug!(id = %word.entry.id, "word edited");
                onedit.emit(candidate);
            }
        })
    };

    let onclose = {
        let state = state.clone();
        let word = props.word.clone();
        let oncancel = props.oncancel.clone();
        let prompter = props.prompter;

        Callback::from(move |_: MouseEvent| {
            let candidate = state.build_word(&word.entry.id);
            if commit_cancel(&word, &candidate, &prompter) {
                oncancel.emit(());
            }
        })
    };

    let translation_fields = Callback::from(
        |(translation, update): (TranslationDraft, Callback<TranslationDraft>)| {
            let onchange_title = {
                let translation = translation.clone();
                let update = update.clone();

                Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    update.emit(TranslationDraft {
                        title: input.value(),
                        ..translation.clone()
                    });
                })
            };

            let onchange_forms = {
                let translation = translation.clone();

                Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    update.emit(TranslationDraft {
                        forms: input.value(),
                        ..translation.clone()
                    });
                })
            };

            html! {
                <>
                    <input value={translation.title.clone()} oninput={onchange_title} />
                    <textarea value={translation.forms.clone()} oninput={onchange_forms} />
                </>
            }
        },
    );

    let tag_fields = Callback::from(|(tag, update): (Tag, Callback<Tag>)| {
        let onchange_tag = Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            update.emit(input.value());
        });

        html! {
            <input value={tag.clone()} oninput={onchange_tag} />
        }
    });

    let content_fields = Callback::from(|(content, update): (Content, Callback<Content>)| {
        let onchange_title = {
            let content = content.clone();
            let update = update.clone();

            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                update.emit(Content {
                    title: input.value(),
                    ..content.clone()
                });
            })
        };

        let onchange_text = {
            let content = content.clone();

            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                update.emit(Content {
                    text: input.value(),
                    ..content.clone()
                });
            })
        };

        html! {
            <>
                <input value={content.title.clone()} oninput={onchange_title} />
                <textarea value={content.text.clone()} oninput={onchange_text} />
            </>
        }
    });

    let variation_fields = Callback::from(|(variation, update): (Variation, Callback<Variation>)| {
        let onchange_title = {
            let variation = variation.clone();
            let update = update.clone();

            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                update.emit(Variation {
                    title: input.value(),
                    ..variation.clone()
                });
            })
        };

        let onchange_form = {
            let variation = variation.clone();

            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                update.emit(Variation {
                    form: input.value(),
                    ..variation.clone()
                });
            })
        };

        html! {
            <>
                <input value={variation.title.clone()} oninput={onchange_title} />
                <input value={variation.form.clone()} oninput={onchange_form} />
            </>
        }
    });

    let relation_fields = {
        let onselect = props.onselect.clone();

        Callback::from(
            move |(relation, update): (RelationDraft, Callback<RelationDraft>)| {
                let onchange_title = {
                    let relation = relation.clone();
                    let update = update.clone();

                    Callback::from(move |e: InputEvent| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        update.emit(RelationDraft {
                            title: input.value(),
                            ..relation.clone()
                        });
                    })
                };

                // Clicking the target field asks the host to pick an entry.
                // The reply may resolve long after the click; it lands
                // through the updater like any other edit.
                let onclick_target = {
                    let relation = relation.clone();
                    let update = update.clone();
                    let onselect = onselect.clone();

                    Callback::from(move |_: MouseEvent| {
                        let relation = relation.clone();
                        let update = update.clone();

                        onselect.emit(Callback::from(move |entry: Option<Entry>| {
                            update.emit(RelationDraft {
                                entry,
                                ..relation.clone()
                            });
                        }));
                    })
                };

                let target = relation
                    .entry
                    .as_ref()
                    .map(|entry| entry.form.clone())
                    .unwrap_or_default();

                html! {
                    <>
                        <input value={relation.title.clone()} oninput={onchange_title} />
                        <input readonly={true} value={target} onclick={onclick_target} />
                    </>
                }
            },
        )
    };

    html! {
        <div class={classes!("otm-ui-word-editor")}>
            <div class={classes!("word-editor-header")}>
                <h2>{ "Edit word" }</h2>
                <button class={classes!("word-saver")} onclick={onsave}>{ "Save" }</button>
                <button class={classes!("word-closer")} onclick={onclose}>{ "X" }</button>
            </div>

            <div class={classes!("otm-ui-prop-editor")}>
                <div class={classes!("prop-title")}>{ "Word" }</div>
                <input value={(*state).form.clone()} oninput={onchange_form} />
            </div>

            <PropEditor<TranslationDraft>
                title={"Translations"}
                items={(*state).translations.clone()}
                default_item={TranslationDraft::default()}
                onchange={onchange_translations}
                children={translation_fields}
                prompter={props.prompter} />

            <PropEditor<Tag>
                title={"Tags"}
                items={(*state).tags.clone()}
                default_item={Tag::new()}
                onchange={onchange_tags}
                children={tag_fields}
                prompter={props.prompter} />

            <PropEditor<Content>
                title={"Contents"}
                items={(*state).contents.clone()}
                default_item={Content::default()}
                onchange={onchange_contents}
                children={content_fields}
                prompter={props.prompter} />

            <PropEditor<Variation>
                title={"Variations"}
                items={(*state).variations.clone()}
                default_item={Variation::default()}
                onchange={onchange_variations}
                children={variation_fields}
                prompter={props.prompter} />

            <PropEditor<RelationDraft>
                title={"Relations"}
                items={(*state).relations.clone()}
                default_item={RelationDraft::default()}
                onchange={onchange_relations}
                children={relation_fields}
                prompter={props.prompter} />
        </div>
    }
}

#[cfg(test)]
#[path = "./word_editor_test.rs"]
mod word_editor_test;

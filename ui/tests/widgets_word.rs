#![cfg(target_arch = "wasm32")]
//! Tests for `widgets/word`.
use otm_core::dictionary::{Entry, Word};
use otm_ui::widgets::word::WordEditor;
use wasm_bindgen_test::*;
use yew::prelude::*;
wasm_bindgen_test_configure!(run_in_browser);

// ******************
// *** WordEditor ***
// ******************

#[wasm_bindgen_test]
async fn word_editor() {
    #[function_component(App)]
    fn app() -> Html {
        let word = Word::new("cat");
        let onedit = Callback::from(|_: Word| {});
        let oncancel = Callback::from(|_: ()| {});
        let onselect = Callback::from(|reply: Callback<Option<Entry>>| {
            reply.emit(None);
        });

        html! {
            <WordEditor {word} {onedit} {oncancel} {onselect} />
        }
    }
}

//! Entry selection overlay.
use otm_core::dictionary::Entry;
use yew::prelude::*;

/// Properties for [`EntrySelector`].
#[derive(Properties, PartialEq)]
pub struct EntrySelectorProps {
    /// Entries offered for selection.
    pub entries: Vec<Entry>,

    /// Callback with the chosen entry, or `None` when selection is
    /// aborted.
    pub onpick: Callback<Option<Entry>>,
}

const CONTAINER_STYLE: &str = "
    position: fixed;
    top: 0;
    bottom: 0;
    left: 0;
    right: 0;

    display: flex;
    justify-content: center;
    align-items: center;
    background-color: rgba(0, 0, 0, 0.5);
";

/// Overlay listing entries to pick a relation target from.
#[function_component(EntrySelector)]
pub fn entry_selector(props: &EntrySelectorProps) -> Html {
    let pick = move |entry: Entry| {
        let onpick = props.onpick.clone();

        Callback::from(move |_: MouseEvent| {
            onpick.emit(Some(entry.clone()));
        })
    };

    let abort = {
        let onpick = props.onpick.clone();

        Callback::from(move |_: MouseEvent| {
            onpick.emit(None);
        })
    };

    html! {
        <div class={classes!("entry-selector-wrapper")} style={CONTAINER_STYLE}>
            <div class={classes!("entry-selector")}>
                <h2>{ "Select an entry" }</h2>
                <ol>
                    { props.entries.iter().map(|entry| html! {
                        <li key={entry.id.to_string()}>
                            <button onclick={pick(entry.clone())}>{ &entry.form }</button>
                        </li>
                    }).collect::<Html>() }
                </ol>
                <button onclick={abort}>{ "Cancel" }</button>
            </div>
        </div>
    }
}

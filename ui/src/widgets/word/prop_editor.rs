//! Generic editor for an ordered, keyed list.
use crate::components::dialog::Prompter;
use crate::types::keyed::{self, ItemKey, KeyedList};
use yew::prelude::*;
use yew::virtual_dom::AttrValue;

const MSG_REMOVE: &str = "Remove this item?";

/// Decides a removal.
///
/// Returns the filtered list to emit, or `None` when the user declines and
/// the list must stay untouched.
pub(crate) fn confirm_remove<T: Clone>(
    items: &KeyedList<T>,
    key: &ItemKey,
    prompter: &Prompter,
) -> Option<KeyedList<T>> {
    if !prompter.confirm(MSG_REMOVE) {
        return None;
    }

    Some(keyed::remove(items, key))
}

/// Properties for [`PropEditor`].
#[derive(Properties, PartialEq)]
pub struct PropEditorProps<T>
where
    T: PartialEq + Clone + 'static,
{
    /// Section label.
    pub title: AttrValue,

    /// Current value.
    pub items: KeyedList<T>,

    /// Cloned for newly added entries.
    pub default_item: T,

    /// Callback with the full replacement list.
    pub onchange: Callback<KeyedList<T>>,

    /// Renders the editing ui of one item.
    ///
    /// # Fields
    /// 1. Current item value.
    /// 2. Callback replacing just that item; the whole list is re-emitted
    /// through `onchange`.
    pub children: Callback<(T, Callback<T>), Html>,

    #[prop_or_default]
    pub prompter: Prompter,
}

/// Editor for an ordered list of keyed items of arbitrary shape.
/// Pure controlled component; every mutation goes through `onchange`.
#[function_component(PropEditor)]
pub fn prop_editor<T>(props: &PropEditorProps<T>) -> Html
where
    T: PartialEq + Clone + 'static,
{
    let swap = move |index: usize| {
        let items = props.items.clone();
        let onchange = props.onchange.clone();

        Callback::from(move |_: MouseEvent| {
            onchange.emit(keyed::swap_with_previous(&items, index));
        })
    };

    let remove = move |key: ItemKey| {
        let items = props.items.clone();
        let onchange = props.onchange.clone();
        let prompter = props.prompter;

        Callback::from(move |_: MouseEvent| {
            if let Some(items) = confirm_remove(&items, &key, &prompter) {
                onchange.emit(items);
            }
        })
    };

    let update = move |key: ItemKey| {
        let items = props.items.clone();
        let onchange = props.onchange.clone();

        Callback::from(move |value: T| {
            onchange.emit(keyed::replace(&items, &key, value));
        })
    };

    let add = {
        let items = props.items.clone();
        let default_item = props.default_item.clone();
        let onchange = props.onchange.clone();

        Callback::from(move |_: MouseEvent| {
            onchange.emit(keyed::push_default(&items, &default_item));
        })
    };

    html! {
        <div class={classes!("otm-ui-prop-editor")}>
            <div class={classes!("prop-title")}>{ props.title.clone() }</div>
            <ol class={classes!("prop-items")}>
                { props.items.iter().enumerate().map(|(index, item)| html! {
                    <li key={item.key.to_string()} class={classes!("prop-item")}>
                        if index > 0 {
                            <button class={classes!("item-swapper")}
                                onclick={swap(index)}>{ "\u{2191}\u{2193}" }</button>
                        }
                        { props.children.emit((item.value.clone(), update(item.key.clone()))) }
                        <button class={classes!("item-remover")}
                            onclick={remove(item.key.clone())}>{ "X" }</button>
                    </li>
                }).collect::<Html>() }
            </ol>
            <button class={classes!("item-adder")} onclick={add}>{ "+" }</button>
        </div>
    }
}

#[cfg(test)]
#[path = "./prop_editor_test.rs"]
mod prop_editor_test;

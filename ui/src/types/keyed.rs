//! Keyed items for stable list editing.
use std::fmt::{self, Display};
use uuid::Uuid;

/// Session-local key of an item within an editable list.
///
/// Keys give list reconciliation a stable handle independent of array
/// position. They carry no domain meaning, are never reused after removal,
/// and are discarded when the list is converted back to its storage shape.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct ItemKey(Uuid);

impl ItemKey {
    pub fn new() -> ItemKey {
        ItemKey(Uuid::new_v4())
    }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// An item paired with its session-local key.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub key: ItemKey,
    pub value: T,
}

impl<T> Keyed<T> {
    pub fn new(value: T) -> Self {
        Self {
            key: ItemKey::new(),
            value,
        }
    }
}

pub type KeyedList<T> = Vec<Keyed<T>>;

/// Assigns a fresh key to every item.
pub fn keyed<T>(items: Vec<T>) -> KeyedList<T> {
    items.into_iter().map(Keyed::new).collect()
}

/// Strips keys, cloning values in list order.
pub fn unkeyed<T: Clone>(items: &KeyedList<T>) -> Vec<T> {
    items.iter().map(|item| item.value.clone()).collect()
}

/// Swaps the item at `index` with its immediate predecessor.
/// Identity when `index` is 0 or out of range.
pub fn swap_with_previous<T: Clone>(items: &KeyedList<T>, index: usize) -> KeyedList<T> {
    let mut items = items.clone();
    if index > 0 && index < items.len() {
        items.swap(index - 1, index);
    }

    items
}

/// Removes the item held under `key`, preserving the relative order of the
/// rest. Identity when the key is not present.
pub fn remove<T: Clone>(items: &KeyedList<T>, key: &ItemKey) -> KeyedList<T> {
    items
        .iter()
        .filter(|item| item.key != *key)
        .cloned()
        .collect()
}

/// Replaces the value held under `key`, leaving the key in place.
pub fn replace<T: Clone>(items: &KeyedList<T>, key: &ItemKey, value: T) -> KeyedList<T> {
    items
        .iter()
        .map(|item| {
            if item.key == *key {
                Keyed {
                    key: item.key.clone(),
                    value: value.clone(),
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Appends a clone of `default` under a fresh key.
pub fn push_default<T: Clone>(items: &KeyedList<T>, default: &T) -> KeyedList<T> {
    let mut items = items.clone();
    items.push(Keyed::new(default.clone()));
    items
}

#[cfg(test)]
#[path = "./keyed_test.rs"]
mod keyed_test;

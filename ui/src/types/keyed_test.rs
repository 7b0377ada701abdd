use super::*;
use fake::faker::lorem::raw::Words;
use fake::locales::EN;
use fake::Fake;

#[test]
fn keyed_should_assign_unique_keys() {
    let items = keyed(create_items(None));

    for (i, a) in items.iter().enumerate() {
        for b in items[(i + 1)..].iter() {
            assert_ne!(a.key, b.key, "keys should be unique");
        }
    }
}

#[test]
fn unkeyed_should_preserve_order() {
    let values = create_items(None);
    let items = keyed(values.clone());

    assert_eq!(values, unkeyed(&items));
}

#[test]
fn swap_with_previous_should_be_an_involution() {
    let items = keyed(create_items(None));

    for index in 1..items.len() {
        let swapped = swap_with_previous(&items, index);
        assert_ne!(items, swapped, "swap should change order");
        assert_eq!(
            items,
            swap_with_previous(&swapped, index),
            "swapping twice should restore the list"
        );
    }
}

#[test]
fn swap_with_previous_should_move_items() {
    let items = keyed(vec!["a", "b", "c"]);
    let swapped = swap_with_previous(&items, 2);

    assert_eq!(vec!["a", "c", "b"], unkeyed(&swapped));
}

#[test]
fn swap_with_previous_should_ignore_invalid_indices() {
    let items = keyed(create_items(None));

    assert_eq!(items, swap_with_previous(&items, 0), "no predecessor");
    assert_eq!(
        items,
        swap_with_previous(&items, items.len()),
        "out of range"
    );
}

#[test]
fn remove_should_preserve_order_of_the_rest() {
    let items = keyed(create_items(Some(4)));
    let target = items[1].key.clone();

    let removed = remove(&items, &target);
    assert!(removed.iter().all(|item| item.key != target));

    let mut expected = items.clone();
    expected.remove(1);
    assert_eq!(expected, removed);
}

#[test]
fn remove_should_ignore_unknown_keys() {
    let items = keyed(create_items(None));

    assert_eq!(items, remove(&items, &ItemKey::new()));
}

#[test]
fn replace_should_keep_the_key() {
    let items = keyed(create_items(Some(3)));
    let target = items[1].key.clone();

    let replaced = replace(&items, &target, "replacement".to_string());
    assert_eq!(target, replaced[1].key, "key should not change");
    assert_eq!("replacement", replaced[1].value);
    assert_eq!(items[0], replaced[0]);
    assert_eq!(items[2], replaced[2]);
}

#[test]
fn push_default_should_append_a_fresh_key() {
    let items = keyed(create_items(None));
    let default = "default".to_string();

    let pushed = push_default(&items, &default);
    assert_eq!(items.len() + 1, pushed.len());
    assert_eq!(&items[..], &pushed[..items.len()]);

    let added = pushed.last().expect("list should not be empty");
    assert_eq!(default, added.value, "value should equal the default");
    assert!(
        items.iter().all(|item| item.key != added.key),
        "key should be fresh"
    );
}

// ***************
// *** helpers ***
// ***************

fn create_items(num: Option<usize>) -> Vec<String> {
    let rng = if let Some(num) = num {
        num..(num + 1)
    } else {
        3..10
    };

    Words(EN, rng).fake::<Vec<String>>()
}

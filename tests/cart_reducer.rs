mod common;

use shopfront::ui::cart::{CartEvent, CartIntent, CartReducer, CartState};
use shopfront::ui::mvi::Reducer;

fn cart(items: &[u32]) -> CartState {
    CartState {
        items: items.to_vec(),
    }
}

#[test]
fn add_then_remove_round_trips() {
    let before = cart(&[2235, 2234]);
    let state = CartReducer::reduce(before.clone(), CartIntent::Add { variant_id: 2234 });
    let state = CartReducer::reduce(state, CartIntent::Remove { variant_id: 2234 });
    // First match is removed, so the multiset is restored.
    assert_eq!(state.len(), before.len());
    assert_eq!(state.count_of(2234), 1);
    assert_eq!(state.count_of(2235), 1);
}

#[test]
fn add_then_remove_of_present_id_reorders() {
    let state = CartReducer::reduce(cart(&[2234, 2235]), CartIntent::Add { variant_id: 2234 });
    let state = CartReducer::reduce(state, CartIntent::Remove { variant_id: 2234 });
    // The earlier unit goes, the one just added stays at the back.
    assert_eq!(state.items, vec![2235, 2234]);
}

#[test]
fn add_then_remove_of_new_id_restores_sequence() {
    let before = cart(&[2235, 2235]);
    let state = CartReducer::reduce(before.clone(), CartIntent::Add { variant_id: 2234 });
    let state = CartReducer::reduce(state, CartIntent::Remove { variant_id: 2234 });
    assert_eq!(state, before);
}

#[test]
fn add_then_remove_on_empty_cart_is_identity() {
    let state = CartReducer::reduce(CartState::default(), CartIntent::Add { variant_id: 7 });
    let state = CartReducer::reduce(state, CartIntent::Remove { variant_id: 7 });
    assert_eq!(state, CartState::default());
}

#[test]
fn remove_absent_id_leaves_cart_unchanged() {
    let before = cart(&[2234, 2234]);
    let state = CartReducer::reduce(before.clone(), CartIntent::Remove { variant_id: 2235 });
    assert_eq!(state, before);
}

#[test]
fn remove_from_empty_cart_is_noop() {
    let state = CartReducer::reduce(CartState::default(), CartIntent::Remove { variant_id: 1 });
    assert!(state.is_empty());
}

#[test]
fn duplicates_are_kept_in_insertion_order() {
    let mut state = CartState::default();
    for id in [2234, 2235, 2234] {
        state = CartReducer::reduce(state, CartIntent::Add { variant_id: id });
    }
    assert_eq!(state.items, vec![2234, 2235, 2234]);
}

#[test]
fn events_convert_to_intents() {
    assert_eq!(
        CartIntent::from(CartEvent::add(5)),
        CartIntent::Add { variant_id: 5 }
    );
    assert_eq!(
        CartIntent::from(CartEvent::remove(5)),
        CartIntent::Remove { variant_id: 5 }
    );
    assert_eq!(CartEvent::add(5).name(), "add-to-cart");
    assert_eq!(CartEvent::remove(5).name(), "remove-from-cart");
}

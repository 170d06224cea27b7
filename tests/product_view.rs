mod common;

use std::sync::mpsc;
use std::sync::Arc;

use shopfront::catalog::Product;
use shopfront::ui::cart::{CartEvent, CartEventKind};
use shopfront::ui::mvi::Reducer;
use shopfront::ui::product::{Pricing, ProductIntent, ProductReducer, ProductView, ProductViewState};

fn state() -> ProductViewState {
    ProductViewState::new(Arc::new(Product::default()), Pricing::default())
}

#[test]
fn initial_selection_is_in_stock() {
    let state = state();
    assert_eq!(state.selected_index(), 0);
    assert!(!state.sold_out());
    assert_eq!(state.stock_label(), "In Stock");
    assert_eq!(state.image(), Some("./img/prod-blue.jpg"));
}

#[test]
fn selecting_sold_out_variant_switches_image_and_stock() {
    let state = ProductReducer::reduce(state(), ProductIntent::Select { index: 1 });
    assert!(state.sold_out());
    assert_eq!(state.stock_label(), "Out of Stock");
    assert_eq!(state.image(), Some("./img/prod-green.jpg"));
}

#[test]
fn every_valid_index_derives_from_its_own_variant() {
    let product = Product::default();
    for (index, variant) in product.variants.iter().enumerate() {
        let state = ProductReducer::reduce(state(), ProductIntent::Select { index });
        assert_eq!(state.image(), Some(variant.image.as_str()));
        assert_eq!(state.sold_out(), variant.quantity == 0);
    }
}

#[test]
fn title_and_price_labels() {
    let state = state();
    assert_eq!(state.title(), "Bevanda Colorata - Italsucchi");
    assert_eq!(state.price_label(), "10.00€");
}

#[test]
fn shipping_depends_only_on_premium_flag() {
    let state = state();
    assert_eq!(state.shipping(false), "2.99€");
    assert_eq!(state.shipping(true), "Free");
}

#[test]
fn custom_pricing_formats_fee() {
    let pricing = Pricing {
        shipping_fee: 4.5,
        currency: "$".to_string(),
    };
    let state = ProductViewState::new(Arc::new(Product::default()), pricing);
    assert_eq!(state.shipping(false), "4.50$");
    assert_eq!(state.price_label(), "10.00$");
}

#[test]
fn out_of_range_selection_is_ignored() {
    let selected = ProductReducer::reduce(state(), ProductIntent::Select { index: 1 });
    let state = ProductReducer::reduce(selected.clone(), ProductIntent::Select { index: 2 });
    assert_eq!(state, selected);
}

#[test]
fn view_emits_remove_for_selected_variant() {
    let (tx, rx) = mpsc::channel();
    let mut view = ProductView::new(state(), tx);
    view.request_remove_from_cart();
    view.select_variant(1);
    view.request_remove_from_cart();

    let events: Vec<CartEvent> = rx.try_iter().collect();
    assert_eq!(events, vec![CartEvent::remove(2234), CartEvent::remove(2235)]);
}

#[test]
fn sold_out_variant_can_still_be_added() {
    let (tx, rx) = mpsc::channel();
    let mut view = ProductView::new(state(), tx);
    view.select_variant(1);
    assert!(view.state().sold_out());
    view.request_add_to_cart();

    let event = rx.try_recv().expect("add event");
    assert_eq!(event.kind, CartEventKind::Add);
    assert_eq!(event.variant_id, 2235);
}

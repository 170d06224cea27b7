use std::sync::mpsc::Sender;

use crate::ui::cart::CartEvent;
use crate::ui::mvi::Reducer;
use crate::ui::product::intent::ProductIntent;
use crate::ui::product::reducer::ProductReducer;
use crate::ui::product::state::ProductViewState;

/// Product card bound to its parent through the cart channel.
pub struct ProductView {
    state: ProductViewState,
    events: Sender<CartEvent>,
}

impl ProductView {
    pub fn new(state: ProductViewState, events: Sender<CartEvent>) -> Self {
        Self { state, events }
    }

    pub fn state(&self) -> &ProductViewState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: ProductIntent) {
        self.state = ProductReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn select_variant(&mut self, index: usize) {
        self.dispatch(ProductIntent::Select { index });
    }

    /// Emits "add-to-cart" for the selected variant. Sold-out variants are
    /// not blocked.
    pub fn request_add_to_cart(&self) {
        if let Some(variant) = self.state.selected_variant() {
            self.emit(CartEvent::add(variant.id));
        }
    }

    /// Emits "remove-from-cart" for the selected variant.
    pub fn request_remove_from_cart(&self) {
        if let Some(variant) = self.state.selected_variant() {
            self.emit(CartEvent::remove(variant.id));
        }
    }

    fn emit(&self, event: CartEvent) {
        tracing::debug!(event = event.name(), variant_id = event.variant_id, "Emitting cart event");
        if self.events.send(event).is_err() {
            tracing::warn!(event = event.name(), "Cart event dropped (receiver gone)");
        }
    }
}

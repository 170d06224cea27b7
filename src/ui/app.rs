use crate::catalog::VariantId;
use crate::config::Config;
use crate::ui::cart::{CartEvent, CartEventKind, CartIntent, CartReducer, CartState};
use crate::ui::mvi::Reducer;
use crate::ui::product::{Pricing, ProductIntent, ProductView, ProductViewState};
use crate::ui::reviews::{ReviewIntent, ReviewListState, ReviewReducer};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Product,
    Reviews,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Root application: owns the shared state (premium flag, cart) and both
/// child views.
pub struct App {
    should_quit: bool,
    focus: Focus,
    user_premium: bool,
    cart: CartState,
    product: ProductView,
    reviews: ReviewListState,
    /// Receiving half of the channel the product view emits on.
    cart_events: Receiver<CartEvent>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let (tx, rx) = mpsc::channel();
        let product_state = ProductViewState::new(
            Arc::new(config.product.clone()),
            Pricing::from(&config.shop),
        );
        Self {
            should_quit: false,
            focus: Focus::Product,
            user_premium: config.shop.user_premium,
            cart: CartState::default(),
            product: ProductView::new(product_state, tx),
            reviews: ReviewListState::default(),
            cart_events: rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Product => Focus::Reviews,
            Focus::Reviews => Focus::Product,
        };
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn on_tick(&mut self) {
        self.pump_cart_events();
    }

    pub fn user_premium(&self) -> bool {
        self.user_premium
    }

    pub fn set_user_premium(&mut self, premium: bool) {
        if self.user_premium != premium {
            tracing::info!(premium, "Premium membership changed");
        }
        self.user_premium = premium;
    }

    pub fn toggle_premium(&mut self) {
        self.set_user_premium(!self.user_premium);
    }

    /// Shipping for the product card, derived from the premium flag.
    pub fn shipping(&self) -> String {
        self.product.state().shipping(self.user_premium)
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn product(&self) -> &ProductViewState {
        self.product.state()
    }

    pub fn product_view(&self) -> &ProductView {
        &self.product
    }

    pub fn reviews(&self) -> &ReviewListState {
        &self.reviews
    }

    pub fn dispatch_product(&mut self, intent: ProductIntent) {
        self.product.dispatch(intent);
    }

    pub fn dispatch_review(&mut self, intent: ReviewIntent) {
        let submitting = intent == ReviewIntent::Submit;
        dispatch_mvi!(self, reviews, ReviewReducer, intent);
        if submitting {
            tracing::debug!(total = self.reviews.reviews.len(), "Review submitted");
        }
    }

    pub fn add_to_cart(&mut self, variant_id: VariantId) {
        dispatch_mvi!(self, cart, CartReducer, CartIntent::Add { variant_id });
        // Ids are trusted as emitted; an unknown one is still added.
        let label = self
            .product()
            .product()
            .variant_by_id(variant_id)
            .map_or("unknown", |v| v.label.as_str());
        tracing::info!(variant_id, label, items = self.cart.len(), "Added to cart");
    }

    pub fn remove_from_cart(&mut self, variant_id: VariantId) {
        let before = self.cart.len();
        dispatch_mvi!(self, cart, CartReducer, CartIntent::Remove { variant_id });
        if self.cart.len() == before {
            tracing::debug!(variant_id, "Remove ignored (not in cart)");
        } else {
            tracing::info!(variant_id, items = self.cart.len(), "Removed from cart");
        }
    }

    /// Applies every cart event the child views have emitted so far.
    /// Returns how many were applied.
    pub fn pump_cart_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.cart_events.try_recv() {
            match event.kind {
                CartEventKind::Add => self.add_to_cart(event.variant_id),
                CartEventKind::Remove => self.remove_from_cart(event.variant_id),
            }
            applied += 1;
        }
        applied
    }
}

use std::sync::Arc;

use crate::catalog::{Product, Variant};
use crate::config::ShopSettings;
use crate::ui::mvi::UiState;

/// Amounts needed to render prices and shipping.
#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    pub shipping_fee: f64,
    pub currency: String,
}

impl Pricing {
    pub fn format(&self, amount: f64) -> String {
        format!("{:.2}{}", amount, self.currency)
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Pricing::from(&ShopSettings::default())
    }
}

impl From<&ShopSettings> for Pricing {
    fn from(settings: &ShopSettings) -> Self {
        Self {
            shipping_fee: settings.shipping_fee,
            currency: settings.currency.clone(),
        }
    }
}

/// Product card state. Only `selected` changes after construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductViewState {
    product: Arc<Product>,
    pricing: Pricing,
    selected: usize,
}

impl UiState for ProductViewState {}

impl ProductViewState {
    pub fn new(product: Arc<Product>, pricing: Pricing) -> Self {
        Self {
            product,
            pricing,
            selected: 0,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_variant(&self) -> Option<&Variant> {
        self.product.variant(self.selected)
    }

    pub fn variant_count(&self) -> usize {
        self.product.variants.len()
    }

    /// Returns a copy with `index` selected, or `None` if no variant is
    /// rendered at that position.
    pub(super) fn with_selected(&self, index: usize) -> Option<Self> {
        if index >= self.variant_count() {
            return None;
        }
        Some(Self {
            selected: index,
            ..self.clone()
        })
    }

    pub fn title(&self) -> String {
        self.product.title()
    }

    pub fn image(&self) -> Option<&str> {
        self.selected_variant().map(|v| v.image.as_str())
    }

    /// True when the selected variant has no stock left.
    pub fn sold_out(&self) -> bool {
        self.selected_variant().map_or(true, |v| !v.in_stock())
    }

    pub fn stock_label(&self) -> &'static str {
        if self.sold_out() {
            "Out of Stock"
        } else {
            "In Stock"
        }
    }

    pub fn price_label(&self) -> String {
        self.pricing.format(self.product.price)
    }

    /// Shipping cost shown to the user: free for premium members.
    pub fn shipping(&self, user_premium: bool) -> String {
        if user_premium {
            "Free".to_string()
        } else {
            self.pricing.format(self.pricing.shipping_fee)
        }
    }
}

//! Static product catalog.
//!
//! The catalog is loaded once at startup (built-in or from the `[product]`
//! section of the config file) and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of a purchasable variant. Unique within a product.
pub type VariantId = u32;

/// One purchasable configuration of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    /// Swatch color as `#rrggbb`.
    pub color: String,
    /// Image path shown for this variant.
    pub image: String,
    /// Units in stock.
    pub quantity: u32,
    pub label: String,
}

impl Variant {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// A product with its selectable variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub price: f64,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Display title, `"<name> - <brand>"`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, self.brand)
    }

    pub fn variant(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }

    pub fn variant_by_id(&self, id: VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Checks catalog invariants, returning a human readable reason on failure.
    pub fn check(&self) -> Result<(), String> {
        if self.variants.is_empty() {
            return Err(format!("Product '{}' has no variants", self.name));
        }
        if !(self.price.is_finite() && self.price >= 0.0) {
            return Err(format!(
                "Product '{}' has invalid price {}",
                self.name, self.price
            ));
        }

        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.id) {
                return Err(format!("Duplicate variant id {}", variant.id));
            }
        }
        Ok(())
    }
}

impl Default for Product {
    fn default() -> Self {
        Self {
            name: "Bevanda Colorata".to_string(),
            brand: "Italsucchi".to_string(),
            price: 10.00,
            on_sale: true,
            details: vec![
                "33cl.".to_string(),
                "Glass bottle".to_string(),
                "Alcohol free".to_string(),
            ],
            variants: vec![
                Variant {
                    id: 2234,
                    color: "#66a7b9".to_string(),
                    image: "./img/prod-blue.jpg".to_string(),
                    quantity: 10,
                    label: "Blue".to_string(),
                },
                Variant {
                    id: 2235,
                    color: "#83aa51".to_string(),
                    image: "./img/prod-green.jpg".to_string(),
                    quantity: 0,
                    label: "Green".to_string(),
                },
            ],
        }
    }
}

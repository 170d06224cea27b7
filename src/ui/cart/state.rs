use crate::catalog::VariantId;
use crate::ui::mvi::UiState;

/// Variant ids in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    pub items: Vec<VariantId>,
}

impl UiState for CartState {}

impl CartState {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of units of `variant_id` in the cart.
    pub fn count_of(&self, variant_id: VariantId) -> usize {
        self.items.iter().filter(|&&id| id == variant_id).count()
    }
}

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductIntent {
    /// Select the variant at `index` in the rendered palette.
    Select { index: usize },
    /// Move selection right, wrapping to the first variant.
    Next,
    /// Move selection left, wrapping to the last variant.
    Previous,
}

impl Intent for ProductIntent {}

use crate::catalog::VariantId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartIntent {
    /// Append one unit. Always succeeds, duplicates allowed.
    Add { variant_id: VariantId },
    /// Drop the first unit with this id. No-op if absent.
    Remove { variant_id: VariantId },
}

impl Intent for CartIntent {}

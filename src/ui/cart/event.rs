use crate::catalog::VariantId;

use super::intent::CartIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEventKind {
    Add,
    Remove,
}

/// Cart mutation requested by a child view, sent child -> parent only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEvent {
    pub kind: CartEventKind,
    pub variant_id: VariantId,
}

impl CartEvent {
    pub fn add(variant_id: VariantId) -> Self {
        Self {
            kind: CartEventKind::Add,
            variant_id,
        }
    }

    pub fn remove(variant_id: VariantId) -> Self {
        Self {
            kind: CartEventKind::Remove,
            variant_id,
        }
    }

    /// Channel name, matching the event names shown in logs.
    pub fn name(&self) -> &'static str {
        match self.kind {
            CartEventKind::Add => "add-to-cart",
            CartEventKind::Remove => "remove-from-cart",
        }
    }
}

impl From<CartEvent> for CartIntent {
    fn from(event: CartEvent) -> Self {
        match event.kind {
            CartEventKind::Add => CartIntent::Add {
                variant_id: event.variant_id,
            },
            CartEventKind::Remove => CartIntent::Remove {
                variant_id: event.variant_id,
            },
        }
    }
}

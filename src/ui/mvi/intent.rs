//! Base trait for intents.

/// Marker trait for user actions addressed to a single view
/// (select a variant, type into the review draft, add to cart).
pub trait Intent: Send + 'static {}

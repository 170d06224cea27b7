//! Base trait for view state.

/// Marker trait for view state.
///
/// `Default` is the state a view starts in, `PartialEq` lets tests and the
/// app compare before/after a dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

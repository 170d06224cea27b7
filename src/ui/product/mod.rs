//! Product card: variant selection and the values derived from it.
//!
//! # Architecture
//!
//! - `state.rs` - selected variant index plus derived title/image/stock/shipping
//! - `intent.rs` - selection intents (by index, next, previous)
//! - `reducer.rs` - selection transitions (pure, rejects unknown indices)
//! - `view.rs` - owns the state and the sending half of the cart channel

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ProductIntent;
pub use reducer::ProductReducer;
pub use state::{Pricing, ProductViewState};
pub use view::ProductView;

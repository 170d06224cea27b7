//! Cart owned by the root application.
//!
//! The cart is an ordered multiset of variant ids. Child views never touch it
//! directly: they send a [`CartEvent`] upward and the app turns it into a
//! [`CartIntent`].

mod event;
mod intent;
mod reducer;
mod state;

pub use event::{CartEvent, CartEventKind};
pub use intent::CartIntent;
pub use reducer::CartReducer;
pub use state::CartState;

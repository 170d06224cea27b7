//! Model-View-Intent (MVI) primitives shared by every view.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ derived values ──→ frame
//!      ↑                                                              │
//!      └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: plain data, replaced wholesale on every transition
//! - **Intent**: a user action addressed to one view
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Derived values (titles, stock labels, shipping cost) are never stored in
//! state; views compute them from state on read.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

//! Free-text reviews: a draft being typed and the submitted list,
//! newest first.

mod intent;
mod reducer;
mod state;

pub use intent::ReviewIntent;
pub use reducer::ReviewReducer;
pub use state::ReviewListState;

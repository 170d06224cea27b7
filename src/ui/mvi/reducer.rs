//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where a view's state changes.
///
/// Implementations are pure: `(State, Intent) -> State`. Anything with an
/// effect outside the view (emitting a cart event, logging) happens in the
/// caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

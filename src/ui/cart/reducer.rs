use crate::ui::cart::intent::CartIntent;
use crate::ui::cart::state::CartState;
use crate::ui::mvi::Reducer;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Add { variant_id } => {
                let mut items = state.items;
                items.push(variant_id);
                CartState { items }
            }
            CartIntent::Remove { variant_id } => {
                let mut items = state.items;
                if let Some(position) = items.iter().position(|&id| id == variant_id) {
                    items.remove(position);
                }
                CartState { items }
            }
        }
    }
}

use crate::ui::mvi::Reducer;
use crate::ui::product::intent::ProductIntent;
use crate::ui::product::state::ProductViewState;

pub struct ProductReducer;

impl Reducer for ProductReducer {
    type State = ProductViewState;
    type Intent = ProductIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = state.variant_count();
        if count == 0 {
            return state;
        }

        let current = state.selected_index();
        let index = match intent {
            ProductIntent::Select { index } => index,
            ProductIntent::Next => {
                if current + 1 >= count {
                    0
                } else {
                    current + 1
                }
            }
            ProductIntent::Previous => {
                if current == 0 {
                    count - 1
                } else {
                    current - 1
                }
            }
        };

        // Indices outside the palette leave the selection untouched.
        state.with_selected(index).unwrap_or(state)
    }
}

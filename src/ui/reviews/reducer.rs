use crate::ui::mvi::Reducer;
use crate::ui::reviews::intent::ReviewIntent;
use crate::ui::reviews::state::ReviewListState;

pub struct ReviewReducer;

impl Reducer for ReviewReducer {
    type State = ReviewListState;
    type Intent = ReviewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let ReviewListState {
            mut draft,
            mut reviews,
        } = state;

        match intent {
            ReviewIntent::Input(ch) => draft.push(ch),
            // The draft is a single line; Enter submits it.
            ReviewIntent::Paste(text) => {
                draft.push_str(&text.lines().collect::<Vec<_>>().join(" "));
            }
            ReviewIntent::Backspace => {
                draft.pop();
            }
            ReviewIntent::Submit => {
                reviews.insert(0, std::mem::take(&mut draft));
            }
        }

        ReviewListState { draft, reviews }
    }
}

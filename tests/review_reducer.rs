mod common;

use shopfront::ui::mvi::Reducer;
use shopfront::ui::reviews::{ReviewIntent, ReviewListState, ReviewReducer};

fn draft(text: &str) -> ReviewListState {
    ReviewListState {
        draft: text.to_string(),
        reviews: Vec::new(),
    }
}

#[test]
fn submit_puts_draft_at_head_and_clears_it() {
    let state = ReviewReducer::reduce(draft("Great taste"), ReviewIntent::Submit);
    assert_eq!(state.latest(), Some("Great taste"));
    assert_eq!(state.draft, "");
}

#[test]
fn newest_review_comes_first() {
    let mut state = ReviewListState::default();
    for text in ["one", "two", "three"] {
        state = ReviewReducer::reduce(state, ReviewIntent::Paste(text.to_string()));
        state = ReviewReducer::reduce(state, ReviewIntent::Submit);
    }
    assert_eq!(state.reviews, vec!["three", "two", "one"]);
}

#[test]
fn empty_draft_is_accepted() {
    let state = ReviewReducer::reduce(ReviewListState::default(), ReviewIntent::Submit);
    assert_eq!(state.reviews, vec![String::new()]);
}

#[test]
fn backspace_removes_last_char() {
    let state = ReviewReducer::reduce(draft("nice!"), ReviewIntent::Backspace);
    assert_eq!(state.draft, "nice");
}

#[test]
fn backspace_handles_multibyte_chars() {
    let state = ReviewReducer::reduce(draft("caffè"), ReviewIntent::Backspace);
    assert_eq!(state.draft, "caff");
}

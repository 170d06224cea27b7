use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewListState {
    pub draft: String,
    /// Submitted reviews, newest first.
    pub reviews: Vec<String>,
}

impl UiState for ReviewListState {}

impl ReviewListState {
    pub fn latest(&self) -> Option<&str> {
        self.reviews.first().map(String::as_str)
    }
}

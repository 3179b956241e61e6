use crate::ui::mvi::UiState;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Idle,
    Success,
    Error,
    Decrement,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackState {
    pub visible: Feedback,
    /// When the visible feedback reverts to idle. `None` while idle.
    pub deadline: Option<Instant>,
    pub generation: u64,
}

impl UiState for FeedbackState {}

impl FeedbackState {
    pub fn is_idle(&self) -> bool {
        self.visible == Feedback::Idle
    }
}

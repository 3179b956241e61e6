//! State for the gesture classifier.

use super::intent::InputSource;
use crate::ui::mvi::UiState;
use tokio::time::Instant;

/// A press between its start and its end or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressSession {
    pub started_at: Instant,
    pub source: InputSource,
    /// Set once the threshold fires; the following release is then swallowed.
    pub long_press: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureState {
    /// Incremented on every accepted press-start.
    pub generation: u64,
    pub session: Option<PressSession>,
}

impl UiState for GestureState {}

impl GestureState {
    pub fn is_armed(&self) -> bool {
        matches!(self.session, Some(session) if !session.long_press)
    }

    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }
}

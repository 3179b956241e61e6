//! Reducer for the gesture classifier.

use crate::ui::mvi::Reducer;

use super::intent::GestureIntent;
use super::state::{GestureState, PressSession};

/// What a physical press resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    Tap,
    LongPress,
}

pub struct GestureReducer;

impl GestureReducer {
    /// The action `intent` produces when applied to `state`, if any.
    ///
    /// At most one action is produced per session: the release is only a tap
    /// while the session is still armed, and the threshold only fires once
    /// for the session it was armed for.
    pub fn action_for(state: &GestureState, intent: &GestureIntent) -> Option<GestureAction> {
        match (intent, state.session) {
            (GestureIntent::PressEnd, Some(session)) if !session.long_press => {
                Some(GestureAction::Tap)
            }
            (GestureIntent::ThresholdElapsed { generation }, Some(session))
                if *generation == state.generation && !session.long_press =>
            {
                Some(GestureAction::LongPress)
            }
            _ => None,
        }
    }
}

impl Reducer for GestureReducer {
    type State = GestureState;
    type Intent = GestureIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GestureIntent::PressStart { source, at } => match state.session {
                Some(_) => state,
                None => GestureState {
                    generation: state.generation.wrapping_add(1),
                    session: Some(PressSession {
                        started_at: at,
                        source,
                        long_press: false,
                    }),
                },
            },

            GestureIntent::PressEnd | GestureIntent::PressCancel => GestureState {
                generation: state.generation,
                session: None,
            },

            GestureIntent::ThresholdElapsed { generation } => match state.session {
                Some(session) if generation == state.generation && !session.long_press => {
                    GestureState {
                        generation,
                        session: Some(PressSession {
                            long_press: true,
                            ..session
                        }),
                    }
                }
                _ => state,
            },
        }
    }
}

use crate::ui::mvi::Reducer;

use super::intent::FeedbackIntent;
use super::state::{Feedback, FeedbackState};

pub struct FeedbackReducer;

impl Reducer for FeedbackReducer {
    type State = FeedbackState;
    type Intent = FeedbackIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedbackIntent::Present {
                feedback,
                duration,
                now,
            } => FeedbackState {
                visible: feedback,
                deadline: (feedback != Feedback::Idle).then(|| now + duration),
                generation: state.generation.wrapping_add(1),
            },

            FeedbackIntent::Expired { generation } if generation == state.generation => {
                FeedbackState {
                    visible: Feedback::Idle,
                    deadline: None,
                    generation,
                }
            }

            FeedbackIntent::Expired { .. } => state,
        }
    }
}

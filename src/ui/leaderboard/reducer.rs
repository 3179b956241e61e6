use crate::ui::mvi::Reducer;

use super::intent::LeaderboardIntent;
use super::state::{LeaderboardState, LOAD_FAILED_MESSAGE};

pub struct LeaderboardReducer;

impl Reducer for LeaderboardReducer {
    type State = LeaderboardState;
    type Intent = LeaderboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LeaderboardIntent::Open => LeaderboardState::Loading,
            LeaderboardIntent::Close => LeaderboardState::Hidden,
            // Results only land on a screen that is still waiting for them.
            LeaderboardIntent::Loaded { entries } => match state {
                LeaderboardState::Loading => LeaderboardState::Loaded { entries },
                other => other,
            },
            LeaderboardIntent::Failed => match state {
                LeaderboardState::Loading => LeaderboardState::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                },
                other => other,
            },
        }
    }
}

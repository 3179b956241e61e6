use crate::ui::mvi::Reducer;

use super::intent::NameEntryIntent;
use super::state::NameEntryState;

const MAX_NAME_CHARS: usize = 32;

pub struct NameEntryReducer;

impl Reducer for NameEntryReducer {
    type State = NameEntryState;
    type Intent = NameEntryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NameEntryIntent::Insert(ch) => {
                let mut state = state;
                if !ch.is_control() && state.input.chars().count() < MAX_NAME_CHARS {
                    state.input.push(ch);
                }
                state
            }
            NameEntryIntent::Backspace => {
                let mut state = state;
                state.input.pop();
                state
            }
            NameEntryIntent::Reject => NameEntryState {
                shaking: true,
                generation: state.generation.wrapping_add(1),
                ..state
            },
            NameEntryIntent::ShakeExpired { generation } if generation == state.generation => {
                NameEntryState {
                    shaking: false,
                    ..state
                }
            }
            NameEntryIntent::ShakeExpired { .. } => state,
        }
    }
}

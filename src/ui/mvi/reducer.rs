//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place where state transitions happen and must be
/// a pure function: (State, Intent) -> State. Side effects (arming timers,
/// issuing requests) are performed by the caller around the dispatch.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

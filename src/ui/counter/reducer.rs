//! Reducer for the counter.

use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;
use super::state::{CounterState, MutationAttempt, MutationKind};

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Loaded { count } => CounterState {
                value: count,
                loaded: true,
                ..state
            },

            CounterIntent::LoadFailed => CounterState {
                value: 0,
                loaded: true,
                ..state
            },

            CounterIntent::Begin { kind } => {
                if state.admit(kind).is_err() {
                    return state;
                }
                let preceding_value = state.value;
                let value = match kind {
                    MutationKind::Increment => preceding_value + 1,
                    MutationKind::Decrement => preceding_value - 1,
                };
                let id = state.next_attempt_id();
                CounterState {
                    value,
                    in_flight: Some(MutationAttempt {
                        id,
                        session: state.session,
                        kind,
                        preceding_value,
                    }),
                    error_message: None,
                    last_attempt: id,
                    ..state
                }
            }

            CounterIntent::Settled { id, result } => {
                let Some(attempt) = state.in_flight.filter(|attempt| attempt.id == id) else {
                    return state;
                };
                // The value it moved belonged to a previous user.
                if attempt.session != state.session {
                    return CounterState {
                        in_flight: None,
                        ..state
                    };
                }
                match result {
                    Ok(()) => CounterState {
                        in_flight: None,
                        ..state
                    },
                    Err(message) => {
                        // Only this attempt moved the value since it began.
                        let value = match attempt.kind {
                            MutationKind::Increment => state.value.saturating_sub(1),
                            MutationKind::Decrement => state.value + 1,
                        };
                        CounterState {
                            value,
                            in_flight: None,
                            error_message: Some(message),
                            ..state
                        }
                    }
                }
            }

            CounterIntent::ClearError => CounterState {
                error_message: None,
                ..state
            },

            CounterIntent::Reset => CounterState {
                session: state.session.wrapping_add(1),
                last_attempt: state.last_attempt,
                in_flight: state.in_flight,
                ..CounterState::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::counter::Refusal;

    fn loaded(value: u64) -> CounterState {
        CounterReducer::reduce(CounterState::default(), CounterIntent::Loaded { count: value })
    }

    fn begin(state: CounterState, kind: MutationKind) -> CounterState {
        CounterReducer::reduce(state, CounterIntent::Begin { kind })
    }

    /// Settles whatever attempt is in flight (or a never-issued id).
    fn settle(state: CounterState, result: Result<(), String>) -> CounterState {
        let id = state.in_flight.map_or(u64::MAX, |attempt| attempt.id);
        CounterReducer::reduce(state, CounterIntent::Settled { id, result })
    }

    #[test]
    fn load_failure_defaults_to_zero() {
        let state = CounterReducer::reduce(CounterState::default(), CounterIntent::LoadFailed);
        assert!(state.loaded);
        assert_eq!(state.value, 0);
        assert_eq!(state.error_message, None);
    }

    #[test]
    fn begin_before_load_is_noop() {
        let state = begin(CounterState::default(), MutationKind::Increment);
        assert_eq!(state, CounterState::default());
    }

    #[test]
    fn increment_is_optimistic_and_marks_in_flight() {
        let state = begin(loaded(5), MutationKind::Increment);
        assert_eq!(state.value, 6);
        assert_eq!(
            state.in_flight,
            Some(MutationAttempt {
                id: 1,
                session: 0,
                kind: MutationKind::Increment,
                preceding_value: 5
            })
        );
    }

    #[test]
    fn second_begin_while_in_flight_is_noop() {
        let state = begin(loaded(5), MutationKind::Increment);
        let again = begin(state.clone(), MutationKind::Increment);
        assert_eq!(again, state);
    }

    #[test]
    fn successful_settle_keeps_value() {
        let state = settle(begin(loaded(5), MutationKind::Increment), Ok(()));
        assert_eq!(state.value, 6);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn failed_increment_rolls_back_exactly() {
        let state = settle(
            begin(loaded(5), MutationKind::Increment),
            Err("Network error".to_string()),
        );
        assert_eq!(state.value, 5);
        assert!(!state.is_in_flight());
        assert_eq!(state.error_message.as_deref(), Some("Network error"));
    }

    #[test]
    fn failed_decrement_rolls_back_exactly() {
        let state = settle(
            begin(loaded(1), MutationKind::Decrement),
            Err("boom".to_string()),
        );
        assert_eq!(state.value, 1);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn decrement_at_zero_is_refused() {
        let state = begin(loaded(0), MutationKind::Decrement);
        assert_eq!(state, loaded(0));
    }

    #[test]
    fn settle_without_attempt_is_ignored() {
        let state = settle(loaded(3), Err("late".to_string()));
        assert_eq!(state, loaded(3));
    }

    #[test]
    fn begin_clears_previous_error() {
        let failed = settle(
            begin(loaded(2), MutationKind::Increment),
            Err("boom".to_string()),
        );
        let state = begin(failed, MutationKind::Increment);
        assert_eq!(state.error_message, None);
        assert_eq!(state.value, 3);
    }

    #[test]
    fn mixed_sequence_tracks_net_total() {
        let mut state = loaded(0);
        for kind in [
            MutationKind::Increment,
            MutationKind::Increment,
            MutationKind::Decrement,
            MutationKind::Increment,
            MutationKind::Decrement,
            MutationKind::Decrement,
            MutationKind::Decrement,
        ] {
            state = settle(begin(state, kind), Ok(()));
        }
        // The final decrement at zero was refused.
        assert_eq!(state.value, 0);
    }

    #[test]
    fn settlement_for_other_attempt_is_ignored() {
        let state = begin(loaded(5), MutationKind::Increment);
        let stale = CounterReducer::reduce(
            state.clone(),
            CounterIntent::Settled {
                id: 7,
                result: Err("late".to_string()),
            },
        );
        assert_eq!(stale, state);
    }

    #[test]
    fn reset_keeps_attempt_in_flight() {
        let state = begin(loaded(5), MutationKind::Increment);
        let state = CounterReducer::reduce(state, CounterIntent::Reset);
        assert!(!state.loaded);
        assert!(state.is_carried_over());

        let state = CounterReducer::reduce(state, CounterIntent::Loaded { count: 2 });
        assert_eq!(state.admit(MutationKind::Increment), Err(Refusal::InFlight));
    }

    #[test]
    fn carried_over_failure_does_not_touch_new_value() {
        let state = begin(loaded(5), MutationKind::Increment);
        let state = CounterReducer::reduce(state, CounterIntent::Reset);
        let state = CounterReducer::reduce(state, CounterIntent::Loaded { count: 2 });
        let state = settle(state, Err("Network error".to_string()));

        assert_eq!(state.value, 2);
        assert_eq!(state.error_message, None);
        assert!(!state.is_in_flight());

        let state = begin(state, MutationKind::Decrement);
        assert_eq!(state.in_flight.map(|attempt| attempt.id), Some(2));
        assert_eq!(state.value, 1);
    }
}

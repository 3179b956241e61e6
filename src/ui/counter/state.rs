//! State for the counter.

use crate::ui::mvi::UiState;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Increment,
    Decrement,
}

impl MutationKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }
}

/// The mutation currently awaiting the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationAttempt {
    /// Matches the attempt to its settlement.
    pub id: u64,
    /// Session (active user) the attempt was issued in.
    pub session: u64,
    pub kind: MutationKind,
    /// Counter value before the optimistic change was applied.
    pub preceding_value: u64,
}

/// Why an attempt was not started. Refusals are silent in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("initial count not loaded yet")]
    NotLoaded,
    #[error("another mutation is in flight")]
    InFlight,
    #[error("count is already zero")]
    AtZero,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterState {
    pub value: u64,
    pub loaded: bool,
    pub in_flight: Option<MutationAttempt>,
    pub error_message: Option<String>,
    /// Bumped on every user switch.
    pub session: u64,
    /// Id of the most recently issued attempt.
    pub last_attempt: u64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Id the next admitted attempt will carry.
    pub fn next_attempt_id(&self) -> u64 {
        self.last_attempt.wrapping_add(1)
    }

    /// True when the in-flight attempt belongs to a previous user.
    pub fn is_carried_over(&self) -> bool {
        self.in_flight
            .is_some_and(|attempt| attempt.session != self.session)
    }

    /// Checks whether an attempt of `kind` may start now.
    pub fn admit(&self, kind: MutationKind) -> Result<(), Refusal> {
        if !self.loaded {
            return Err(Refusal::NotLoaded);
        }
        if self.in_flight.is_some() {
            return Err(Refusal::InFlight);
        }
        if kind == MutationKind::Decrement && self.value == 0 {
            return Err(Refusal::AtZero);
        }
        Ok(())
    }
}

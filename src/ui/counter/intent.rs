//! Intents for the counter.

use super::state::MutationKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CounterIntent {
    /// Initial count arrived from the service.
    Loaded { count: u64 },

    /// Initial count query failed; start from zero.
    LoadFailed,

    /// Apply the optimistic change for a new attempt.
    Begin { kind: MutationKind },

    /// Request `id` finished. `Err` carries the message to show.
    Settled { id: u64, result: Result<(), String> },

    /// Error banner expired.
    ClearError,

    /// Active user changed; wait for a new initial load. An attempt still in
    /// flight keeps blocking new ones until it settles.
    Reset,
}

impl Intent for CounterIntent {}

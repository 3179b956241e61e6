//! Counter feature module: optimistic value and the single in-flight mutation.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Counter value, load flag, in-flight attempt, error message
//! - `intent.rs` - Load results, mutation begin/settle
//! - `reducer.rs` - Optimistic apply and compensating rollback (pure)
//!
//! Issuing the request is the caller's job, and only after
//! [`CounterState::admit`] has accepted the attempt.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterState, MutationAttempt, MutationKind, Refusal};

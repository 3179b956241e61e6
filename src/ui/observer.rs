//! Outward notifications for embedding the widget.

use crate::ui::feedback::Feedback;

/// Receives counter changes as they happen.
///
/// All methods default to no-ops; implement only what the display layer needs.
/// Calls happen on the event loop, so implementations must not block.
pub trait CounterObserver: Send + Sync {
    fn on_count_changed(&self, _value: u64) {}

    fn on_feedback(&self, _feedback: Feedback) {}

    /// `None` when the error banner is cleared.
    fn on_error(&self, _message: Option<&str>) {}
}

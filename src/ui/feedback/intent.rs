use super::state::Feedback;
use crate::ui::mvi::Intent;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackIntent {
    /// Show `feedback`; non-idle feedback expires after `duration`.
    Present {
        feedback: Feedback,
        duration: Duration,
        now: Instant,
    },

    /// Expiry timer for `generation` fired.
    Expired { generation: u64 },
}

impl Intent for FeedbackIntent {}

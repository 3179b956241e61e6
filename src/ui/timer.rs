//! Single-shot timers that report back through the event channel.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::ui::events::{AppEvent, AppEventSender};

/// Holds at most one pending timer. Arming replaces (and aborts) the previous
/// one, so timers never stack.
#[derive(Default)]
pub struct TimerSlot {
    handle: Option<JoinHandle<()>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts `event` after `delay`. Must be called inside a tokio runtime.
    pub fn arm(&mut self, delay: Duration, events: &AppEventSender, event: AppEvent) {
        self.cancel();
        let deadline = Instant::now() + delay;
        let events = events.clone();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = events.send(event);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}

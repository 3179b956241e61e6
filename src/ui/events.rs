use crossterm::event::{self, Event};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::service::{LeaderboardEntry, ServiceError};
use crate::shutdown::ShutdownHandle;
use crate::ui::counter::MutationKind;

const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    /// Raw terminal input.
    Input(Event),
    /// Long-press threshold elapsed for the press with this generation.
    LongPressElapsed { generation: u64 },
    FeedbackExpired { generation: u64 },
    ShakeExpired { generation: u64 },
    /// Initial count query finished for `user`.
    CountLoaded {
        user: String,
        result: Result<u64, ServiceError>,
    },
    /// Mutation attempt `id` finished.
    MutationSettled {
        id: u64,
        kind: MutationKind,
        result: Result<(), ServiceError>,
    },
    /// Leaderboard query `generation` finished.
    LeaderboardLoaded {
        generation: u64,
        result: Result<Vec<LeaderboardEntry>, ServiceError>,
    },
    /// OS signal received (SIGINT)
    Shutdown,
}

pub type AppEventSender = mpsc::UnboundedSender<AppEvent>;
pub type AppEventReceiver = mpsc::UnboundedReceiver<AppEvent>;

pub fn channel() -> (AppEventSender, AppEventReceiver) {
    mpsc::unbounded_channel()
}

/// Reads terminal input on a dedicated thread and forwards it to the loop.
pub fn spawn_input_reader(events: AppEventSender, shutdown: ShutdownHandle) {
    let spawned = thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            // Short poll timeout to check the shutdown flag frequently
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if events.send(AppEvent::Input(ev)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "terminal read failed");
                        break;
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    tracing::error!(error = %err, "terminal poll failed");
                    break;
                }
            }
        });

    if let Err(err) = spawned {
        tracing::error!(error = %err, "failed to start input reader");
    }
}

//! Shared test utilities: a scripted counter service, a recording observer
//! and a harness that drives the app on tokio's paused clock.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tapcounter::config::{Config, NameStore};
use tapcounter::service::{CounterService, LeaderboardEntry, ServiceError};
use tapcounter::ui::app::App;
use tapcounter::ui::events::{channel, AppEventReceiver};
use tapcounter::ui::feedback::Feedback;
use tapcounter::ui::gesture::InputSource;
use tapcounter::ui::observer::CounterObserver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetCount(String),
    GetLeaderboard(usize),
    Increment(String),
    Decrement(String),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(self, Call::Increment(_) | Call::Decrement(_))
    }
}

/// Scripted result of the next mutation.
#[derive(Debug, Clone)]
pub enum Outcome {
    Sent,
    Fail(String),
    Panic,
}

/// In-memory counter service. Mutations succeed unless an outcome is queued.
pub struct FakeService {
    count: Mutex<Result<u64, ServiceError>>,
    leaderboard: Mutex<Result<Vec<LeaderboardEntry>, ServiceError>>,
    scripted_boards: Mutex<VecDeque<(Vec<LeaderboardEntry>, Duration)>>,
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: Mutex<Vec<Call>>,
    latency: Mutex<Duration>,
}

impl FakeService {
    pub fn with_count(count: u64) -> Arc<Self> {
        Arc::new(Self {
            count: Mutex::new(Ok(count)),
            leaderboard: Mutex::new(Ok(Vec::new())),
            scripted_boards: Mutex::new(VecDeque::new()),
            outcomes: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            latency: Mutex::new(Duration::ZERO),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        let service = Self::with_count(0);
        *service.count.lock() = Err(ServiceError::transport("Network error"));
        *service.leaderboard.lock() = Err(ServiceError::transport("Network error"));
        service
    }

    pub fn set_leaderboard(&self, entries: Vec<LeaderboardEntry>) {
        *self.leaderboard.lock() = Ok(entries);
    }

    /// Answers the next leaderboard query with `entries` after `delay`.
    pub fn push_leaderboard(&self, entries: Vec<LeaderboardEntry>, delay: Duration) {
        self.scripted_boards.lock().push_back((entries, delay));
    }

    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock() = latency;
    }

    pub fn push_outcome(&self, outcome: Outcome) {
        self.outcomes.lock().push_back(outcome);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn mutation_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn count_of(&self, wanted: fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| wanted(call)).count()
    }

    async fn mutate(&self, call: Call) -> Result<(), ServiceError> {
        self.calls.lock().push(call);
        let latency = *self.latency.lock();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        let outcome = self.outcomes.lock().pop_front().unwrap_or(Outcome::Sent);
        match outcome {
            Outcome::Sent => Ok(()),
            Outcome::Fail(message) => Err(ServiceError::transport(message)),
            Outcome::Panic => panic!("scripted panic in counter service"),
        }
    }
}

#[async_trait]
impl CounterService for FakeService {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn get_count(&self, user: &str) -> Result<u64, ServiceError> {
        self.calls.lock().push(Call::GetCount(user.to_string()));
        self.count.lock().clone()
    }

    async fn get_leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        self.calls.lock().push(Call::GetLeaderboard(limit));
        let scripted = self.scripted_boards.lock().pop_front();
        if let Some((entries, delay)) = scripted {
            tokio::time::sleep(delay).await;
            return Ok(entries);
        }
        self.leaderboard.lock().clone()
    }

    async fn increment(&self, user: &str) -> Result<(), ServiceError> {
        self.mutate(Call::Increment(user.to_string())).await
    }

    async fn decrement(&self, user: &str) -> Result<(), ServiceError> {
        self.mutate(Call::Decrement(user.to_string())).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Count(u64),
    Feedback(Feedback),
    Error(Option<String>),
}

#[derive(Default)]
pub struct RecordingObserver {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingObserver {
    pub fn seen(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn clear(&self) {
        self.seen.lock().clear();
    }
}

impl CounterObserver for RecordingObserver {
    fn on_count_changed(&self, value: u64) {
        self.seen.lock().push(Notification::Count(value));
    }

    fn on_feedback(&self, feedback: Feedback) {
        self.seen.lock().push(Notification::Feedback(feedback));
    }

    fn on_error(&self, message: Option<&str>) {
        self.seen
            .lock()
            .push(Notification::Error(message.map(str::to_string)));
    }
}

/// Drives an [`App`] without a terminal. Use under `start_paused = true`.
pub struct Harness {
    pub app: App,
    pub events: AppEventReceiver,
    pub service: Arc<FakeService>,
    pub observer: Arc<RecordingObserver>,
}

impl Harness {
    pub fn new(service: Arc<FakeService>) -> Self {
        Self::with_config(service, Config::default())
    }

    pub fn with_config(service: Arc<FakeService>, config: Config) -> Self {
        Self::build(service, config, None)
    }

    pub fn with_name_store(service: Arc<FakeService>, store: NameStore) -> Self {
        Self::build(service, Config::default(), Some(store))
    }

    fn build(service: Arc<FakeService>, config: Config, store: Option<NameStore>) -> Self {
        let (tx, events) = channel();
        let observer = Arc::new(RecordingObserver::default());
        let mut app = App::new(config, service.clone(), tx).with_observer(observer.clone());
        if let Some(store) = store {
            app = app.with_name_store(store);
        }
        Self {
            app,
            events,
            service,
            observer,
        }
    }

    /// Harness with `user` active and the initial count already loaded.
    pub async fn loaded(user: &str, count: u64) -> Self {
        let mut harness = Self::new(FakeService::with_count(count));
        harness.app.activate(user);
        harness.pump().await;
        harness.observer.clear();
        harness
    }

    /// Lets spawned tasks run without moving the clock.
    pub async fn run_tasks() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    /// Runs spawned tasks and feeds every event they post back into the app
    /// until nothing more arrives.
    pub async fn pump(&mut self) {
        loop {
            Self::run_tasks().await;
            let mut delivered = false;
            while let Ok(event) = self.events.try_recv() {
                self.app.handle_event(event);
                delivered = true;
            }
            if !delivered {
                break;
            }
        }
    }

    /// Moves the paused clock forward, then pumps.
    pub async fn advance_ms(&mut self, ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        self.pump().await;
    }

    /// Press and release in the same tick.
    pub fn tap(&mut self) {
        self.app.press_start(InputSource::Pointer);
        self.app.press_end();
    }

    /// Press, hold past the threshold, release.
    pub async fn long_press(&mut self) {
        let hold = self.app.config().gestures.long_press_ms;
        self.app.press_start(InputSource::Pointer);
        self.pump().await;
        self.advance_ms(hold).await;
        self.app.press_end();
        self.pump().await;
    }
}

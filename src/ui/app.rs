use crate::config::{Config, NameStore};
use crate::service::{CounterService, LeaderboardEntry, ServiceError};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState, MutationKind, Refusal};
use crate::ui::events::{AppEvent, AppEventSender};
use crate::ui::feedback::{Feedback, FeedbackIntent, FeedbackReducer, FeedbackState};
use crate::ui::gesture::{GestureAction, GestureIntent, GestureReducer, GestureState, InputSource};
use crate::ui::leaderboard::{LeaderboardIntent, LeaderboardReducer, LeaderboardState};
use crate::ui::mvi::Reducer;
use crate::ui::name_entry::{NameEntryIntent, NameEntryReducer, NameEntryState};
use crate::ui::observer::CounterObserver;
use crate::ui::timer::TimerSlot;
use scopeguard::ScopeGuard;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    NameEntry,
    Counter,
    Leaderboard,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The widget: owns every piece of state and performs side effects.
///
/// All methods run on the event loop. Timers and network calls are spawned
/// tasks that report back through [`AppEvent`]s; none of them touch state.
pub struct App {
    should_quit: bool,
    screen: Screen,
    user_name: Option<String>,
    config: Config,
    service: Arc<dyn CounterService>,
    events: AppEventSender,
    name_store: Option<NameStore>,
    observers: Vec<Arc<dyn CounterObserver>>,
    key_release_supported: bool,
    gesture: GestureState,
    counter: CounterState,
    feedback: FeedbackState,
    name_entry: NameEntryState,
    leaderboard: LeaderboardState,
    /// Tags leaderboard queries so only the latest one lands.
    leaderboard_generation: u64,
    long_press_timer: TimerSlot,
    feedback_timer: TimerSlot,
    shake_timer: TimerSlot,
}

impl App {
    pub fn new(config: Config, service: Arc<dyn CounterService>, events: AppEventSender) -> Self {
        Self {
            should_quit: false,
            screen: Screen::NameEntry,
            user_name: None,
            config,
            service,
            events,
            name_store: None,
            observers: Vec::new(),
            key_release_supported: false,
            gesture: GestureState::default(),
            counter: CounterState::default(),
            feedback: FeedbackState::default(),
            name_entry: NameEntryState::default(),
            leaderboard: LeaderboardState::default(),
            leaderboard_generation: 0,
            long_press_timer: TimerSlot::new(),
            feedback_timer: TimerSlot::new(),
            shake_timer: TimerSlot::new(),
        }
    }

    pub fn with_name_store(mut self, store: NameStore) -> Self {
        self.name_store = Some(store);
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn CounterObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Whether the terminal reports key releases (keyboard hold detection).
    pub fn set_key_release_supported(&mut self, supported: bool) {
        self.key_release_supported = supported;
    }

    pub fn key_release_supported(&self) -> bool {
        self.key_release_supported
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn feedback(&self) -> &FeedbackState {
        &self.feedback
    }

    pub fn name_entry(&self) -> &NameEntryState {
        &self.name_entry
    }

    pub fn leaderboard(&self) -> &LeaderboardState {
        &self.leaderboard
    }

    /// Fraction of the long-press threshold the current press has been held.
    pub fn hold_progress(&self) -> Option<f64> {
        let session = self.gesture.session?;
        if session.long_press {
            return Some(1.0);
        }
        let threshold = self.config.gestures.long_press().as_secs_f64();
        Some((session.started_at.elapsed().as_secs_f64() / threshold).min(1.0))
    }

    /// Switches to the counter for `name` and issues the initial count query.
    pub fn activate(&mut self, name: &str) {
        let name = name.trim().to_string();
        info!(user = %name, service = self.service.name(), "activating counter");

        self.cancel_press();
        self.present(Feedback::Idle, Duration::ZERO);
        self.update_counter(CounterIntent::Reset);
        self.user_name = Some(name.clone());
        self.screen = Screen::Counter;

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.get_count(&name).await;
            let _ = events.send(AppEvent::CountLoaded { user: name, result });
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            // Routed by the runtime, which knows the button's hit area.
            AppEvent::Input(_) => {}
            AppEvent::LongPressElapsed { generation } => {
                self.apply_gesture(GestureIntent::ThresholdElapsed { generation });
            }
            AppEvent::FeedbackExpired { generation } => self.on_feedback_expired(generation),
            AppEvent::ShakeExpired { generation } => {
                dispatch_mvi!(
                    self,
                    name_entry,
                    NameEntryReducer,
                    NameEntryIntent::ShakeExpired { generation }
                );
            }
            AppEvent::CountLoaded { user, result } => self.on_count_loaded(user, result),
            AppEvent::MutationSettled { id, kind, result } => {
                self.on_mutation_settled(id, kind, result)
            }
            AppEvent::LeaderboardLoaded { generation, result } => {
                self.on_leaderboard_loaded(generation, result)
            }
            AppEvent::Shutdown => self.request_quit(),
        }
    }

    // --- Gestures ---

    pub fn press_start(&mut self, source: InputSource) {
        if self.screen != Screen::Counter {
            return;
        }
        let previous = self.gesture.generation;
        dispatch_mvi!(
            self,
            gesture,
            GestureReducer,
            GestureIntent::PressStart {
                source,
                at: Instant::now(),
            }
        );
        if self.gesture.generation == previous {
            debug!(?source, "press start ignored, another press is armed");
            return;
        }
        let generation = self.gesture.generation;
        self.long_press_timer.arm(
            self.config.gestures.long_press(),
            &self.events,
            AppEvent::LongPressElapsed { generation },
        );
    }

    pub fn press_end(&mut self) {
        self.long_press_timer.cancel();
        self.apply_gesture(GestureIntent::PressEnd);
    }

    pub fn press_cancel(&mut self) {
        self.cancel_press();
    }

    fn cancel_press(&mut self) {
        self.long_press_timer.cancel();
        self.apply_gesture(GestureIntent::PressCancel);
    }

    fn apply_gesture(&mut self, intent: GestureIntent) {
        let action = GestureReducer::action_for(&self.gesture, &intent);
        dispatch_mvi!(self, gesture, GestureReducer, intent);
        let result = match action {
            Some(GestureAction::Tap) => self.request_increment(),
            Some(GestureAction::LongPress) => self.request_decrement(),
            None => return,
        };
        if let Err(refusal) = result {
            debug!(?action, %refusal, "gesture produced no mutation");
        }
    }

    // --- Mutations ---

    pub fn request_increment(&mut self) -> Result<(), Refusal> {
        self.request_mutation(MutationKind::Increment)
    }

    pub fn request_decrement(&mut self) -> Result<(), Refusal> {
        self.request_mutation(MutationKind::Decrement)
    }

    fn request_mutation(&mut self, kind: MutationKind) -> Result<(), Refusal> {
        let Some(user) = self.user_name.clone() else {
            return Err(Refusal::NotLoaded);
        };
        // Check-and-set happens here, before anything is spawned.
        self.counter.admit(kind)?;
        let id = self.counter.next_attempt_id();
        self.update_counter(CounterIntent::Begin { kind });
        info!(
            id,
            kind = kind.label(),
            user = %user,
            optimistic = self.counter.value,
            "mutation issued"
        );

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            // Settles the attempt even if this task is aborted or panics.
            let guard = scopeguard::guard(events, move |events| {
                let _ = events.send(AppEvent::MutationSettled {
                    id,
                    kind,
                    result: Err(ServiceError::transport("Request aborted")),
                });
            });
            let result = match kind {
                MutationKind::Increment => service.increment(&user).await,
                MutationKind::Decrement => service.decrement(&user).await,
            };
            let events = ScopeGuard::into_inner(guard);
            let _ = events.send(AppEvent::MutationSettled { id, kind, result });
        });
        Ok(())
    }

    fn on_mutation_settled(
        &mut self,
        id: u64,
        kind: MutationKind,
        result: Result<(), ServiceError>,
    ) {
        if self.counter.in_flight.map(|attempt| attempt.id) != Some(id) {
            debug!(id, kind = kind.label(), "settlement without matching attempt ignored");
            return;
        }
        if self.counter.is_carried_over() {
            // Issued for the previous user: release the slot, show nothing.
            debug!(id, kind = kind.label(), ok = result.is_ok(), "previous user's mutation settled");
            self.update_counter(CounterIntent::Settled {
                id,
                result: result.map_err(|err| err.to_string()),
            });
            return;
        }
        match result {
            Ok(()) => {
                self.update_counter(CounterIntent::Settled { id, result: Ok(()) });
                info!(kind = kind.label(), value = self.counter.value, "mutation sent");
                let feedback = match kind {
                    MutationKind::Increment => Feedback::Success,
                    MutationKind::Decrement => Feedback::Decrement,
                };
                self.present(feedback, self.config.feedback.success_duration());
            }
            Err(err) => {
                let message = err.to_string();
                self.update_counter(CounterIntent::Settled {
                    id,
                    result: Err(message.clone()),
                });
                warn!(
                    kind = kind.label(),
                    error = %message,
                    value = self.counter.value,
                    "mutation failed, rolled back"
                );
                self.present(Feedback::Error, self.config.feedback.error_duration());
            }
        }
    }

    fn on_count_loaded(&mut self, user: String, result: Result<u64, ServiceError>) {
        if self.user_name.as_deref() != Some(user.as_str()) {
            debug!(user = %user, "count for inactive user ignored");
            return;
        }
        match result {
            Ok(count) => {
                info!(user = %user, count, "initial count loaded");
                self.update_counter(CounterIntent::Loaded { count });
            }
            Err(err) => {
                warn!(user = %user, error = %err, "initial count unavailable, starting from zero");
                self.update_counter(CounterIntent::LoadFailed);
            }
        }
    }

    fn update_counter(&mut self, intent: CounterIntent) {
        let previous_value = self.counter.value;
        let previous_error = self.counter.error_message.clone();
        dispatch_mvi!(self, counter, CounterReducer, intent);

        if self.counter.value != previous_value {
            for observer in &self.observers {
                observer.on_count_changed(self.counter.value);
            }
        }
        if self.counter.error_message != previous_error {
            for observer in &self.observers {
                observer.on_error(self.counter.error_message.as_deref());
            }
        }
    }

    // --- Feedback ---

    /// Shows `feedback`, replacing whatever is visible and its expiry timer.
    pub fn present(&mut self, feedback: Feedback, duration: Duration) {
        self.feedback_timer.cancel();
        dispatch_mvi!(
            self,
            feedback,
            FeedbackReducer,
            FeedbackIntent::Present {
                feedback,
                duration,
                now: Instant::now(),
            }
        );
        if feedback != Feedback::Idle {
            let generation = self.feedback.generation;
            self.feedback_timer.arm(
                duration,
                &self.events,
                AppEvent::FeedbackExpired { generation },
            );
        }
        for observer in &self.observers {
            observer.on_feedback(feedback);
        }
    }

    fn on_feedback_expired(&mut self, generation: u64) {
        let expiring = self.feedback.visible;
        dispatch_mvi!(
            self,
            feedback,
            FeedbackReducer,
            FeedbackIntent::Expired { generation }
        );
        if self.feedback.visible == expiring {
            debug!(generation, "stale feedback expiry ignored");
            return;
        }
        for observer in &self.observers {
            observer.on_feedback(self.feedback.visible);
        }
        if expiring == Feedback::Error {
            self.update_counter(CounterIntent::ClearError);
        }
    }

    // --- Name entry ---

    pub fn type_char(&mut self, ch: char) {
        dispatch_mvi!(self, name_entry, NameEntryReducer, NameEntryIntent::Insert(ch));
    }

    pub fn backspace(&mut self) {
        dispatch_mvi!(self, name_entry, NameEntryReducer, NameEntryIntent::Backspace);
    }

    pub fn submit_name(&mut self) {
        let Some(name) = self.name_entry.submission().map(str::to_string) else {
            dispatch_mvi!(self, name_entry, NameEntryReducer, NameEntryIntent::Reject);
            let generation = self.name_entry.generation;
            self.shake_timer.arm(
                self.config.feedback.shake_duration(),
                &self.events,
                AppEvent::ShakeExpired { generation },
            );
            return;
        };

        if let Some(store) = &self.name_store {
            if let Err(err) = store.save(&name) {
                warn!(error = %err, "failed to store display name");
            }
        }
        self.shake_timer.cancel();
        self.name_entry = NameEntryState::default();
        self.activate(&name);
    }

    // --- Leaderboard ---

    pub fn open_leaderboard(&mut self) {
        if self.screen != Screen::Counter {
            return;
        }
        self.cancel_press();
        self.screen = Screen::Leaderboard;
        self.refresh_leaderboard();
    }

    pub fn refresh_leaderboard(&mut self) {
        if self.screen != Screen::Leaderboard {
            return;
        }
        dispatch_mvi!(self, leaderboard, LeaderboardReducer, LeaderboardIntent::Open);
        self.leaderboard_generation = self.leaderboard_generation.wrapping_add(1);

        let generation = self.leaderboard_generation;
        let limit = self.config.service.leaderboard_limit;
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.get_leaderboard(limit).await;
            let _ = events.send(AppEvent::LeaderboardLoaded { generation, result });
        });
    }

    pub fn close_leaderboard(&mut self) {
        if self.screen != Screen::Leaderboard {
            return;
        }
        dispatch_mvi!(self, leaderboard, LeaderboardReducer, LeaderboardIntent::Close);
        self.screen = Screen::Counter;
    }

    fn on_leaderboard_loaded(
        &mut self,
        generation: u64,
        result: Result<Vec<LeaderboardEntry>, ServiceError>,
    ) {
        if generation != self.leaderboard_generation {
            debug!(generation, "superseded leaderboard result ignored");
            return;
        }
        let intent = match result {
            Ok(entries) => {
                debug!(rows = entries.len(), "leaderboard loaded");
                LeaderboardIntent::Loaded { entries }
            }
            Err(err) => {
                warn!(error = %err, "leaderboard query failed");
                LeaderboardIntent::Failed
            }
        };
        dispatch_mvi!(self, leaderboard, LeaderboardReducer, intent);
    }
}

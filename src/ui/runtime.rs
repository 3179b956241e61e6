use crate::config::{Config, NameStore};
use crate::service::CounterService;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{channel, spawn_input_reader, AppEvent};
use crate::ui::input::handle_input;
use crate::ui::layout::button_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Redraw cadence while idle, so the hold progress bar advances.
const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run(
    config: Config,
    service: Arc<dyn CounterService>,
    name_store: NameStore,
    user_name: Option<String>,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownCoordinator::new();
    let (events_tx, mut events_rx) = channel();

    spawn_input_reader(events_tx.clone(), shutdown.handle());
    {
        let events_tx = events_tx.clone();
        let shutdown = shutdown.handle();
        tokio::spawn(async move {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    if result.is_ok() {
                        let _ = events_tx.send(AppEvent::Shutdown);
                    }
                }
                _ = shutdown.wait() => {}
            }
        });
    }

    let mut app = App::new(config, service, events_tx).with_name_store(name_store);
    app.set_key_release_supported(guard.key_release_supported());
    if let Some(name) = user_name {
        app.activate(&name);
    }

    let mut ticker = tokio::time::interval(TICK_RATE);
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events_rx.recv() => match event {
                Some(AppEvent::Input(input)) => {
                    let size = terminal.size()?;
                    let button = button_rect(Rect::new(0, 0, size.width, size.height));
                    handle_input(&mut app, input, button);
                }
                Some(event) => app.handle_event(event),
                None => break,
            },
            _ = ticker.tick() => {}
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}

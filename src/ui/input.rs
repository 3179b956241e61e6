use crate::ui::app::{App, Screen};
use crate::ui::gesture::InputSource;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Routes one terminal event. `button` is the counter's hit area.
pub fn handle_input(app: &mut App, event: Event, button: Rect) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse, button),
        Event::FocusLost => app.press_cancel(),
        _ => {}
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Press && is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::NameEntry => {
            if key.kind == KeyEventKind::Release {
                return;
            }
            match key.code {
                KeyCode::Enter => app.submit_name(),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Esc => app.request_quit(),
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.type_char(ch)
                }
                _ => {}
            }
        }
        Screen::Counter => match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => match key.kind {
                KeyEventKind::Press if app.key_release_supported() => {
                    app.press_start(InputSource::Keyboard)
                }
                // Without release events a key press can only be a tap.
                KeyEventKind::Press => {
                    app.press_start(InputSource::Keyboard);
                    app.press_end();
                }
                KeyEventKind::Release => app.press_end(),
                KeyEventKind::Repeat => {}
            },
            _ if key.kind != KeyEventKind::Press => {}
            KeyCode::Char('l') | KeyCode::Char('L') => app.open_leaderboard(),
            KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
            _ => {}
        },
        Screen::Leaderboard => {
            if key.kind != KeyEventKind::Press {
                return;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.close_leaderboard(),
                KeyCode::Char('r') => app.refresh_leaderboard(),
                KeyCode::Char('q') => app.request_quit(),
                _ => {}
            }
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, button: Rect) {
    if app.screen() != Screen::Counter {
        return;
    }
    let inside = contains(button, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => {
            app.press_start(InputSource::Pointer)
        }
        MouseEventKind::Up(MouseButton::Left) => app.press_end(),
        // Leaving the button while held aborts the press.
        MouseEventKind::Drag(MouseButton::Left) if !inside => app.press_cancel(),
        _ => {}
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

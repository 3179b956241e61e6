use crate::ui::app::{App, Screen};
use crate::ui::feedback::Feedback;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{button_rect, centered_rect_by_size, layout_regions};
use crate::ui::leaderboard::{rank_label, LeaderboardState};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BUTTON_IDLE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_DECREMENT,
    STATUS_ERROR, STATUS_OK, STOUT_CREAM,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(
        Header::new().widget(app.user_name(), service_label(app)),
        header,
    );
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::NameEntry => draw_name_entry(frame, app, body),
        Screen::Counter => draw_counter(frame, app, area),
        Screen::Leaderboard => draw_leaderboard(frame, app, body),
    }
    frame.render_widget(Footer::new().widget(footer, app.screen()), footer);
}

fn service_label(app: &App) -> &str {
    app.config()
        .service
        .endpoint
        .as_deref()
        .unwrap_or("demo mode")
}

fn draw_name_entry(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let state = app.name_entry();
    let panel = centered_rect_by_size(44, 9, body);
    // Shift the box sideways while shaking.
    let panel = if state.shaking && panel.x > 1 {
        Rect {
            x: panel.x - 2,
            ..panel
        }
    } else {
        panel
    };
    let border = if state.shaking {
        STATUS_ERROR
    } else {
        STOUT_CREAM
    };

    let lines = vec![
        Line::from(Span::styled(
            "TAP COUNTER",
            Style::default()
                .fg(STOUT_CREAM)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Enter your name to begin",
            Style::default().fg(HEADER_SEPARATOR),
        ))
        .centered(),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(border)),
            Span::styled(state.input.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled("▏", Style::default().fg(HEADER_SEPARATOR)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[ START ]",
            Style::default().fg(BUTTON_IDLE).add_modifier(Modifier::BOLD),
        ))
        .centered(),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        ),
        panel,
    );
}

fn draw_counter(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let counter = app.counter();
    let button = button_rect(area);

    let color = match app.feedback().visible {
        Feedback::Idle => BUTTON_IDLE,
        Feedback::Success => STATUS_OK,
        Feedback::Error => STATUS_ERROR,
        Feedback::Decrement => STATUS_DECREMENT,
    };
    let mut border_style = Style::default().fg(color);
    if counter.is_in_flight() {
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    let value = if counter.loaded {
        counter.value.to_string()
    } else {
        "…".to_string()
    };
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
    ];
    if let Some(progress) = app.hold_progress() {
        let width = button.width.saturating_sub(4) as usize;
        let filled = ((width as f64) * progress).round() as usize;
        lines.push(
            Line::from(vec![
                Span::styled("█".repeat(filled), Style::default().fg(STATUS_DECREMENT)),
                Span::styled(
                    "░".repeat(width.saturating_sub(filled)),
                    Style::default().fg(GLOBAL_BORDER),
                ),
            ])
            .centered(),
        );
    } else if counter.is_in_flight() {
        lines.push(
            Line::from(Span::styled("sending…", Style::default().fg(HEADER_SEPARATOR)))
                .centered(),
        );
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(border_style),
        ),
        button,
    );

    let below = Rect {
        x: area.x,
        y: button.y + button.height,
        width: area.width,
        height: 1,
    };
    if below.y < area.height {
        let name = app.user_name().unwrap_or_default().to_string();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(name, Style::default().fg(HEADER_TEXT))).centered()),
            below,
        );
    }

    if let Some(message) = counter.error_message.as_deref() {
        let banner = Rect {
            y: below.y + 2,
            ..below
        };
        if banner.y < area.height {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", message),
                    Style::default().fg(HEADER_TEXT).bg(STATUS_ERROR),
                ),
                Span::styled(
                    " Tap to retry ",
                    Style::default()
                        .fg(STATUS_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .centered();
            frame.render_widget(Paragraph::new(line), banner);
        }
    }
}

fn draw_leaderboard(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let panel = centered_rect_by_size(48, 16, body);
    let muted = Style::default().fg(HEADER_SEPARATOR);

    let lines = match app.leaderboard() {
        LeaderboardState::Hidden | LeaderboardState::Loading => {
            vec![Line::from(Span::styled("Loading...", muted)).centered()]
        }
        LeaderboardState::Failed { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))
        .centered()],
        LeaderboardState::Loaded { entries } if entries.is_empty() => {
            vec![Line::from(Span::styled("No entries yet", muted)).centered()]
        }
        LeaderboardState::Loaded { entries } => {
            let name_width = entries
                .iter()
                .map(|entry| entry.name.chars().count())
                .max()
                .unwrap_or(0);
            entries
                .iter()
                .enumerate()
                .map(|(idx, entry)| {
                    let mut style = Style::default().fg(HEADER_TEXT);
                    if Some(entry.name.as_str()) == app.user_name() {
                        style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
                    }
                    Line::from(vec![
                        Span::styled(format!(" {:>3}  ", rank_label(idx)), style),
                        Span::styled(
                            format!("{:<width$}", entry.name, width = name_width),
                            style,
                        ),
                        Span::styled(format!("  {:>6} ", entry.count), style),
                    ])
                })
                .collect()
        }
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Leaderboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(STOUT_CREAM)),
        ),
        panel,
    );
}

use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STOUT_CREAM};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, user: Option<&str>, service: &str) -> Paragraph<'static> {
        let title_style = Style::default()
            .fg(STOUT_CREAM)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("TAP COUNTER", title_style),
        ];
        if let Some(user) = user {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(user.to_string(), text_style));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(service.to_string(), text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

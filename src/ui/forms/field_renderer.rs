//! Field rendering utilities for the enquiry form

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows one field occupies: bordered input box plus one line for its error
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field with its validation message underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    locked: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let focused = is_active && !locked;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Required fields carry the same asterisk the labels do on the web form
    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let value = field.display_value();
    let content = if value.is_empty() {
        Line::from(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        match &field.value {
            FieldValue::Select { .. } if focused => Line::from(vec![
                Span::styled("\u{25c2} ", Style::default().fg(Color::Cyan)),
                Span::raw(value),
                Span::styled(" \u{25b8}", Style::default().fg(Color::Cyan)),
            ]),
            FieldValue::Text(_) if focused => Line::from(vec![
                Span::raw(value),
                Span::styled("\u{258c}", Style::default().fg(Color::Cyan)),
            ]),
            _ => Line::from(value),
        }
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(message) = error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(error_line, chunks[1]);
    }
}

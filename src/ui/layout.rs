//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen, reserving the bottom line for the status bar
pub fn content_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {}", view_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if app.state.is_submitting() {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

/// Keyboard hints for the current mode
fn view_hints(app: &App) -> &'static str {
    if app.state.ack.is_some() {
        "Enter:dismiss"
    } else if app.state.is_enquiry_open() {
        "Tab:next  \u{2191}\u{2193}:choose  ^S:submit  Esc:close"
    } else {
        "e:enquiry  q:quit"
    }
}

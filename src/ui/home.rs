//! Home screen with the school header and branch contact numbers

use crate::state::catalog::BRANCHES;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the home screen
pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" GMS Ongole ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Admission Enquiries",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Admissions are open across all branches."),
        Line::from(""),
        Line::from(Span::styled(
            "  Branches",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for branch in BRANCHES {
        lines.push(Line::from(vec![
            Span::raw(format!("    {:<14}", branch.location)),
            Span::styled(branch.contact_phone, Style::default().fg(Color::Cyan)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  Press "),
        Span::styled(
            "e",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to make an admission enquiry."),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! Acknowledgment dialog shown after a submit attempt

use super::base::{render_dialog, DialogConfig};
use crate::state::{AckKind, Acknowledgment};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submit-outcome acknowledgment centered on the screen
pub fn render_ack_dialog(frame: &mut Frame, ack: &Acknowledgment) {
    let (title, accent) = match ack.kind {
        AckKind::Success => ("Enquiry Sent", Color::Green),
        AckKind::Failure => ("Submission Failed", Color::Red),
    };

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent,
            message: ack.message,
            hint: Some(hint),
            max_width: 56,
        },
    );
}

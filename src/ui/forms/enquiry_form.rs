//! Enquiry dialog rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::state::{EnquiryDialog, FieldId};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Dialog width in columns
const DIALOG_WIDTH: u16 = 54;

/// Draw the modal enquiry dialog centered over the home screen
pub fn draw_enquiry_dialog(frame: &mut Frame, dialog: &EnquiryDialog) {
    let area = frame.area();

    let field_rows = FIELD_HEIGHT * FieldId::ALL.len() as u16;
    let dialog_width = DIALOG_WIDTH.min(area.width);
    let dialog_height = (field_rows + BUTTON_HEIGHT + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Admission Enquiry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // Student Name
            Constraint::Length(FIELD_HEIGHT), // Class
            Constraint::Length(FIELD_HEIGHT), // Branch
            Constraint::Length(FIELD_HEIGHT), // Phone
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .split(inner);

    for (i, id) in FieldId::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[i],
            dialog.form.field(*id),
            dialog.form.active_field_index == i,
            dialog.submitting,
            dialog.errors.get(id).copied(),
        );
    }

    draw_buttons(frame, chunks[FieldId::ALL.len()], dialog);
}

/// Submit / Cancel side by side
fn draw_buttons(frame: &mut Frame, area: Rect, dialog: &EnquiryDialog) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let on_buttons = dialog.form.is_buttons_row_active() && !dialog.submitting;
    let submit_label = if dialog.submitting {
        "Submitting..."
    } else {
        "Submit Enquiry"
    };

    render_button(
        frame,
        chunks[0],
        submit_label,
        on_buttons && dialog.form.selected_button == 0,
        !dialog.submitting,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        "Cancel",
        on_buttons && dialog.form.selected_button == 1,
        !dialog.submitting,
        Some(Color::Gray),
    );
}

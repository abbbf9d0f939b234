//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let content_area = layout::content_area(frame.area());

    // Home screen always sits underneath the overlays
    home::draw(frame, content_area);

    if let Some(dialog) = &app.state.enquiry {
        forms::draw_enquiry_dialog(frame, dialog);
    }

    if let Some(ack) = &app.state.ack {
        components::render_ack_dialog(frame, ack);
    }

    layout::draw_status_bar(frame, app);
}

//! Application state and core logic

use crate::config::MailerConfig;
use crate::mailer::{EmailJsMailer, EnquiryMailer, EnquiryPayload};
use crate::state::validation;
use crate::state::{Acknowledgment, AppState, EnquiryDialog};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Sentinel sent when the optional email field is left blank
const EMAIL_NOT_PROVIDED: &str = "Not provided";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Transport that delivers enquiries
    mailer: Box<dyn EnquiryMailer>,
    /// Destination and service identity for outgoing enquiries
    config: MailerConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance with the real EmailJS transport
    pub fn new(config: MailerConfig) -> Self {
        let mailer = Box::new(EmailJsMailer::new(&config));
        Self::with_mailer(config, mailer)
    }

    /// Create an App with a caller-supplied transport (used by tests)
    pub fn with_mailer(config: MailerConfig, mailer: Box<dyn EnquiryMailer>) -> Self {
        Self {
            state: AppState::default(),
            mailer,
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Open the enquiry dialog with a fresh, empty form
    pub fn open_enquiry(&mut self) {
        self.state.enquiry = Some(EnquiryDialog::new());
    }

    /// Close the enquiry dialog, discarding any entered values
    pub fn close_enquiry(&mut self) {
        self.state.enquiry = None;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // A pending acknowledgment swallows all input until dismissed
        if self.state.ack.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.ack = None;
            }
            return Ok(());
        }

        if self.state.is_enquiry_open() {
            self.handle_enquiry_key(key).await
        } else {
            self.handle_home_key(key)
        }
    }

    /// Handle keys on the home screen
    fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('e') | KeyCode::Enter => self.open_enquiry(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the enquiry dialog is open
    async fn handle_enquiry_key(&mut self, key: KeyEvent) -> Result<()> {
        // The form-and-buttons pair is locked while a submission is in flight
        if self.state.is_submitting() {
            return Ok(());
        }

        let (on_buttons, submit_selected) = match self.state.enquiry.as_ref() {
            Some(dialog) => (
                dialog.form.is_buttons_row_active(),
                dialog.form.selected_button == 0,
            ),
            None => return Ok(()),
        };

        match key.code {
            KeyCode::Esc => self.close_enquiry(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_enquiry().await;
            }
            KeyCode::Enter if on_buttons => {
                if submit_selected {
                    self.submit_enquiry().await;
                } else {
                    self.close_enquiry();
                }
            }
            _ => {
                let Some(dialog) = self.state.enquiry.as_mut() else {
                    return Ok(());
                };
                match key.code {
                    // Enter on a field advances like Tab
                    KeyCode::Tab | KeyCode::Enter => dialog.form.next_field(),
                    KeyCode::BackTab => dialog.form.prev_field(),
                    KeyCode::Left | KeyCode::Right if on_buttons => dialog.form.toggle_button(),
                    KeyCode::Up => {
                        if let Some(field) = dialog.form.active_field_mut() {
                            field.prev_option();
                        }
                    }
                    KeyCode::Down => {
                        if let Some(field) = dialog.form.active_field_mut() {
                            field.next_option();
                        }
                    }
                    KeyCode::Char(c) => {
                        if let Some(field) = dialog.form.active_field_mut() {
                            field.push_char(c);
                        }
                    }
                    KeyCode::Backspace => {
                        if let Some(field) = dialog.form.active_field_mut() {
                            field.pop_char();
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Validate the form and, if every rule passes, deliver the enquiry.
    ///
    /// Validation failure attaches per-field messages and never reaches the
    /// transport. Transport failure keeps the dialog open with its values.
    pub async fn submit_enquiry(&mut self) {
        let Some(dialog) = self.state.enquiry.as_mut() else {
            return;
        };
        // At most one in-flight submission per dialog
        if dialog.submitting {
            return;
        }
        dialog.submitting = true;

        let errors = validation::validate(&dialog.form);
        if !errors.is_empty() {
            dialog.errors = errors;
            dialog.submitting = false;
            return;
        }
        dialog.errors.clear();

        let email = dialog.form.email.as_text();
        let payload = EnquiryPayload {
            to_email: self.config.destination_address.clone(),
            student_name: dialog.form.student_name.as_text().to_string(),
            class: dialog.form.class.selected().unwrap_or_default().to_string(),
            branch: dialog.form.branch.selected().unwrap_or_default().to_string(),
            phone: dialog.form.phone.as_text().to_string(),
            email: if email.is_empty() {
                EMAIL_NOT_PROVIDED.to_string()
            } else {
                email.to_string()
            },
        };

        tracing::info!(
            class = payload.class.as_str(),
            branch = payload.branch.as_str(),
            "Submitting admission enquiry"
        );

        match self.mailer.send(&payload).await {
            Ok(()) => {
                // Success discards the dialog and its values; the next open
                // starts from an empty form
                self.state.enquiry = None;
                self.state.ack = Some(Acknowledgment::success());
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to submit enquiry");
                if let Some(dialog) = self.state.enquiry.as_mut() {
                    dialog.submitting = false;
                }
                self.state.ack = Some(Acknowledgment::failure());
            }
        }
    }
}

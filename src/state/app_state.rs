//! Application state definitions

use crate::state::forms::{EnquiryForm, FieldId};
use std::collections::HashMap;

/// Outcome kind of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckKind {
    Success,
    Failure,
}

/// A blocking acknowledgment shown after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub kind: AckKind,
    pub message: &'static str,
}

impl Acknowledgment {
    pub fn success() -> Self {
        Self {
            kind: AckKind::Success,
            message: "Thank you for your enquiry. We will contact you soon!",
        }
    }

    pub fn failure() -> Self {
        Self {
            kind: AckKind::Failure,
            message: "There was an error submitting your enquiry. Please try again.",
        }
    }
}

/// State of the enquiry dialog; exists only while the dialog is open
#[derive(Debug, Clone, Default)]
pub struct EnquiryDialog {
    pub form: EnquiryForm,
    /// Per-field messages from the last failed validation pass
    pub errors: HashMap<FieldId, &'static str>,
    /// True while a submission is in flight; locks the form and the buttons
    pub submitting: bool,
}

impl EnquiryDialog {
    /// A fresh dialog with an empty form
    pub fn new() -> Self {
        Self::default()
    }
}

/// Top-level application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The enquiry dialog; `None` while closed (nothing renders, no input)
    pub enquiry: Option<EnquiryDialog>,
    /// Pending acknowledgment overlay, shown until dismissed
    pub ack: Option<Acknowledgment>,
}

impl AppState {
    pub fn is_enquiry_open(&self) -> bool {
        self.enquiry.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.enquiry.as_ref().is_some_and(|d| d.submitting)
    }
}

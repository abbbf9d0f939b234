//! Enquiry form state

use super::field::FormField;
use crate::state::catalog::{BRANCH_LOCATIONS, CLASS_LEVELS};

/// Identifies one field of the enquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    StudentName,
    Class,
    Branch,
    Phone,
    Email,
}

impl FieldId {
    /// All fields in tab order.
    pub const ALL: [FieldId; 5] = [
        FieldId::StudentName,
        FieldId::Class,
        FieldId::Branch,
        FieldId::Phone,
        FieldId::Email,
    ];
}

/// The admission enquiry form.
///
/// One value set per dialog open; the last focus position is the buttons
/// row (Submit / Cancel).
#[derive(Debug, Clone)]
pub struct EnquiryForm {
    pub student_name: FormField,
    pub class: FormField,
    pub branch: FormField,
    pub phone: FormField,
    pub email: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Submit, 1=Cancel)
    pub selected_button: usize,
}

impl EnquiryForm {
    pub fn new() -> Self {
        Self {
            student_name: FormField::text(
                "student_name",
                "Student Name",
                "Enter student name",
                true,
            ),
            class: FormField::select("class", "Class", "Select class", CLASS_LEVELS),
            branch: FormField::select("branch", "Branch", "Select branch", BRANCH_LOCATIONS),
            phone: FormField::text("phone", "Phone Number", "Enter 10-digit phone number", true),
            email: FormField::text("email", "Email ID", "Enter email address", false),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    /// Fields plus the buttons row
    pub fn field_count(&self) -> usize {
        FieldId::ALL.len() + 1
    }

    /// Returns true if the buttons row is currently focused
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == FieldId::ALL.len()
    }

    /// The focused field, or `None` when the buttons row is focused
    pub fn active_field_id(&self) -> Option<FieldId> {
        FieldId::ALL.get(self.active_field_index).copied()
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Move between Submit and Cancel on the buttons row
    pub fn toggle_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::StudentName => &self.student_name,
            FieldId::Class => &self.class,
            FieldId::Branch => &self.branch,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
        }
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::StudentName => &mut self.student_name,
            FieldId::Class => &mut self.class,
            FieldId::Branch => &mut self.branch,
            FieldId::Phone => &mut self.phone,
            FieldId::Email => &mut self.email,
        }
    }

    /// The focused field, mutable; `None` on the buttons row
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.active_field_id().map(|id| self.field_mut(id))
    }
}

impl Default for EnquiryForm {
    fn default() -> Self {
        Self::new()
    }
}

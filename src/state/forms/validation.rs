//! Per-field validation rules for the enquiry form
//!
//! Pure functions from raw field values to error messages. No rule looks at
//! more than one field, and no rule has side effects; the controller decides
//! what to do with the aggregate result.

use super::enquiry::{EnquiryForm, FieldId};
use crate::state::catalog::{BRANCH_LOCATIONS, CLASS_LEVELS};
use std::collections::HashMap;

/// Evaluate every field rule; an empty map means the form may be submitted.
pub fn validate(form: &EnquiryForm) -> HashMap<FieldId, &'static str> {
    let mut errors = HashMap::new();

    if form.student_name.is_blank() {
        errors.insert(FieldId::StudentName, "Student name is required");
    }
    if let Some(msg) = class_error(form.class.selected()) {
        errors.insert(FieldId::Class, msg);
    }
    if let Some(msg) = branch_error(form.branch.selected()) {
        errors.insert(FieldId::Branch, msg);
    }
    if let Some(msg) = phone_error(form.phone.as_text()) {
        errors.insert(FieldId::Phone, msg);
    }
    if let Some(msg) = email_error(form.email.as_text()) {
        errors.insert(FieldId::Email, msg);
    }

    errors
}

fn class_error(selected: Option<&str>) -> Option<&'static str> {
    match selected {
        Some(value) if CLASS_LEVELS.contains(&value) => None,
        _ => Some("Class is required"),
    }
}

fn branch_error(selected: Option<&str>) -> Option<&'static str> {
    match selected {
        Some(value) if BRANCH_LOCATIONS.contains(&value) => None,
        _ => Some("Branch is required"),
    }
}

fn phone_error(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Phone number is required");
    }
    if value.len() != 10 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Some("Please enter a valid 10-digit phone number");
    }
    None
}

fn email_error(value: &str) -> Option<&'static str> {
    if value.is_empty() || is_valid_email(value) {
        None
    } else {
        Some("Please enter a valid email address")
    }
}

/// `local@domain.tld` shape: domain has at least one dot segment and the
/// top-level segment is letters only, length >= 2. Case-insensitive.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let Some((head, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if head.is_empty()
        || !head
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> EnquiryForm {
        let mut form = EnquiryForm::new();
        form.student_name.set_text("Asha".to_string());
        form.class.set_selected(7); // Class 5
        form.branch.set_selected(0); // Court Center
        form.phone.set_text("9490226123".to_string());
        form
    }

    #[test]
    fn test_valid_form_passes() {
        let errors = validate(&valid_form());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = valid_form();
        form.student_name.set_text("   ".to_string());
        let errors = validate(&form);
        assert_eq!(
            errors.get(&FieldId::StudentName),
            Some(&"Student name is required")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_unselected_class_rejected() {
        let mut form = valid_form();
        form.class.pop_char();
        let errors = validate(&form);
        assert_eq!(errors.get(&FieldId::Class), Some(&"Class is required"));
    }

    #[test]
    fn test_unselected_branch_rejected() {
        let mut form = valid_form();
        form.branch.pop_char();
        let errors = validate(&form);
        assert_eq!(errors.get(&FieldId::Branch), Some(&"Branch is required"));
    }

    #[test]
    fn test_empty_phone_rejected_as_required() {
        assert_eq!(phone_error(""), Some("Phone number is required"));
    }

    #[test]
    fn test_phone_length_and_digit_rules() {
        assert_eq!(
            phone_error("123456789"),
            Some("Please enter a valid 10-digit phone number")
        );
        assert_eq!(
            phone_error("12345678901"),
            Some("Please enter a valid 10-digit phone number")
        );
        assert_eq!(
            phone_error("12345abcde"),
            Some("Please enter a valid 10-digit phone number")
        );
        assert_eq!(phone_error("9876543210"), None);
    }

    #[test]
    fn test_email_is_optional() {
        assert_eq!(email_error(""), None);
    }

    #[test]
    fn test_email_shapes() {
        assert_eq!(email_error("a@b.co"), None);
        assert_eq!(email_error("A.B-c_1%+x@mail.example.COM"), None);
        assert_eq!(
            email_error("a@b"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            email_error("not-an-email"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            email_error("a@b.c"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            email_error("a@b.c0"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            email_error("@b.co"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            email_error("a@@b.co"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_each_failing_field_reported_separately() {
        let form = EnquiryForm::new();
        let errors = validate(&form);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key(&FieldId::StudentName));
        assert!(errors.contains_key(&FieldId::Class));
        assert!(errors.contains_key(&FieldId::Branch));
        assert!(errors.contains_key(&FieldId::Phone));
        // email empty is fine
        assert!(!errors.contains_key(&FieldId::Email));
    }
}

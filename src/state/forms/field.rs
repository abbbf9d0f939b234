//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    /// Shown in place of the value while the field is empty
    pub placeholder: &'static str,
    pub required: bool,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new free-text field
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            placeholder,
            required,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new single-select field over a fixed option list
    pub fn select(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            required: true,
            value: FieldValue::Select {
                options,
                selected: None,
            },
        }
    }

    /// Get the text value (returns empty string for select fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { .. } => "",
        }
    }

    /// Get the chosen option, if any (returns `None` for text fields)
    pub fn selected(&self) -> Option<&'static str> {
        match &self.value {
            FieldValue::Select { options, selected } => selected.map(|i| options[i]),
            FieldValue::Text(_) => None,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the chosen option by index (clamped to the option list)
    pub fn set_selected(&mut self, index: usize) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = Some(index.min(options.len() - 1));
        }
    }

    /// Push a character to the field value (ignored for select fields)
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character; on a select field, clears the selection
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Select { selected, .. } => {
                *selected = None;
            }
        }
    }

    /// Move to the next option (wraps around; ignored for text fields)
    pub fn next_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = Some(match selected {
                Some(i) => (*i + 1) % options.len(),
                None => 0,
            });
        }
    }

    /// Move to the previous option (wraps around; ignored for text fields)
    pub fn prev_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = Some(match selected {
                Some(0) | None => options.len() - 1,
                Some(i) => *i - 1,
            });
        }
    }

    /// True when the field holds no usable value
    pub fn is_blank(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Select { selected, .. } => selected.is_none(),
        }
    }

    /// Get the display value for rendering (empty when nothing is entered)
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, selected } => selected
                .map(|i| options[i].to_string())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &["One", "Two", "Three"];

    fn text_field() -> FormField {
        FormField::text("phone", "Phone Number", "Enter 10-digit phone number", true)
    }

    fn select_field() -> FormField {
        FormField::select("class", "Class", "Select class", OPTIONS)
    }

    #[test]
    fn test_text_push_and_pop() {
        let mut field = text_field();
        field.push_char('9');
        field.push_char('8');
        assert_eq!(field.as_text(), "98");
        field.pop_char();
        assert_eq!(field.as_text(), "9");
    }

    #[test]
    fn test_text_blank_on_whitespace() {
        let mut field = text_field();
        assert!(field.is_blank());
        field.set_text("   ".to_string());
        assert!(field.is_blank());
        field.set_text("x".to_string());
        assert!(!field.is_blank());
    }

    #[test]
    fn test_select_starts_unselected() {
        let field = select_field();
        assert!(field.is_blank());
        assert_eq!(field.selected(), None);
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_select_next_wraps() {
        let mut field = select_field();
        field.next_option();
        assert_eq!(field.selected(), Some("One"));
        field.next_option();
        field.next_option();
        assert_eq!(field.selected(), Some("Three"));
        field.next_option();
        assert_eq!(field.selected(), Some("One"));
    }

    #[test]
    fn test_select_prev_from_unselected_picks_last() {
        let mut field = select_field();
        field.prev_option();
        assert_eq!(field.selected(), Some("Three"));
        field.prev_option();
        assert_eq!(field.selected(), Some("Two"));
    }

    #[test]
    fn test_select_backspace_clears_selection() {
        let mut field = select_field();
        field.next_option();
        assert!(!field.is_blank());
        field.pop_char();
        assert_eq!(field.selected(), None);
    }

    #[test]
    fn test_select_ignores_typed_characters() {
        let mut field = select_field();
        field.push_char('x');
        assert_eq!(field.selected(), None);
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_set_selected_clamps() {
        let mut field = select_field();
        field.set_selected(99);
        assert_eq!(field.selected(), Some("Three"));
    }
}

//! Form field value objects

use crate::validation::{FieldError, FieldName};

/// Input kind, used for rendering hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Text,
}

/// A bound form field: its value, how to set it, and its current error
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub kind: FieldKind,
    value: String,
    error: Option<FieldError>,
}

impl FormField {
    /// Create an empty email field
    pub fn email(name: FieldName, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create an empty text field
    pub fn text(name: FieldName, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    fn new(name: FieldName, label: &str, kind: FieldKind) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind,
            value: String::new(),
            error: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Clear the value and any error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    #[allow(dead_code)]
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Error message to show beneath the input
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(|e| e.message)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Set or clear the error. Errors for other fields are ignored.
    pub fn set_error(&mut self, error: Option<FieldError>) {
        self.error = error.filter(|e| e.field == self.name);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        &self.value
    }
}

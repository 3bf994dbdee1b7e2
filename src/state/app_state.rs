//! Top-level application state

use super::forms::SignupForm;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The sign-up form
    pub form: SignupForm,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Errors waiting to be shown in the error dialog, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the current error, revealing the next one if any
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

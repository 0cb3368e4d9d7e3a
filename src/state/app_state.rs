//! Application state definitions

use super::forms::IntakeForm;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The intake form session
    pub form: IntakeForm,

    /// Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,

    /// Feedback shown in the status bar
    pub status_message: Option<String>,

    /// Number of successful submissions in this run
    pub submitted_count: usize,
}

impl AppState {
    /// Queue an error for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Error currently shown in the error dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn has_error(&self) -> bool {
        !self.error_queue.is_empty()
    }
}

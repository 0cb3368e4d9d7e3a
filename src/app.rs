//! Application state and core logic

use crate::platform::has_shortcut_modifier;
use crate::sink::SubmissionSink;
use crate::state::{AppState, FieldId, Focus, NavAction, NavButton, Submission};
use crate::ui::{FieldEvent, LabeledTextField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where completed forms are delivered
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App delivering submissions to `sink`
    pub fn new(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::default(),
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Request the event loop to stop
    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The error dialog is modal
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Keyboard shortcuts (work from anywhere)
        if has_shortcut_modifier(&key) {
            match key.code {
                KeyCode::Char('n') => {
                    self.handle_next();
                    return Ok(());
                }
                KeyCode::Char('b') => {
                    self.handle_back();
                    return Ok(());
                }
                KeyCode::Char('s') => {
                    self.handle_submit().await;
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.state.form.next_focus(),
            KeyCode::BackTab => self.state.form.prev_focus(),
            _ => match self.state.form.focus() {
                Focus::Field(FieldId::Vendor) => self.handle_vendor_key(key),
                Focus::Field(field) => self.handle_text_key(field, key),
                Focus::Nav => self.handle_nav_key(key).await,
            },
        }
        Ok(())
    }

    /// Route a key to the focused text field
    fn handle_text_key(&mut self, field: FieldId, key: KeyEvent) {
        // Built from live state so events always carry the current value
        let values = self.state.form.values();
        let input = LabeledTextField::new(field.question(), values.get(field))
            .placeholder(field.placeholder())
            .show_button(false);

        match input.handle_key(key) {
            Some(FieldEvent::Changed(value)) => self.state.form.update_field(field, value),
            // Intake fields render without an action button
            Some(FieldEvent::Add(_)) | None => {}
        }
    }

    fn handle_vendor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.state.form.cycle_vendor(false)
            }
            KeyCode::Right
            | KeyCode::Down
            | KeyCode::Char('l')
            | KeyCode::Char('j')
            | KeyCode::Char(' ') => self.state.form.cycle_vendor(true),
            KeyCode::Enter => self.state.form.next_focus(),
            _ => {}
        }
    }

    async fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.select_nav(NavButton::Back),
            KeyCode::Right | KeyCode::Char('l') => {
                self.state.form.select_nav(NavButton::Primary)
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.form.selected_nav_action() {
                Some(NavAction::Back) => self.handle_back(),
                Some(NavAction::Next) => self.handle_next(),
                Some(NavAction::Submit) => self.handle_submit().await,
                // Back is disabled on the first step
                None => {}
            },
            _ => {}
        }
    }

    /// Advance to the next step
    pub fn handle_next(&mut self) {
        if self.state.form.handle_next() {
            self.state.status_message = None;
        }
    }

    /// Return to the previous step
    pub fn handle_back(&mut self) {
        if self.state.form.handle_back() {
            self.state.status_message = None;
        }
    }

    /// Hand the form to the sink. Does nothing unless on the last step.
    ///
    /// On success the form starts over; on failure the values stay and the
    /// error is queued for the error dialog.
    pub async fn handle_submit(&mut self) {
        let Some(values) = self.state.form.submission() else {
            tracing::debug!("submit ignored before the last step");
            return;
        };

        let submission = Submission::new(values);
        match self.sink.submit(&submission).await {
            Ok(()) => {
                tracing::info!(id = %submission.id, sink = self.sink.name(), "form submitted");
                self.state.submitted_count += 1;
                self.state.status_message =
                    Some(format!("Request submitted ({})", self.sink.name()));
                self.state.form.reset();
            }
            Err(err) => {
                tracing::error!(id = %submission.id, error = %err, "submission failed");
                self.state.push_error(format!("Submission failed: {err}"));
            }
        }
    }
}

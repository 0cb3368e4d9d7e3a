//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
pub mod view;

pub use forms::{FieldEvent, LabeledTextField};

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    let view = view::build_view(&app.state.form);
    forms::draw_intake_form(frame, main_area, &view);

    layout::draw_status_bar(frame, status_area, app);

    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::LogSink;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_first_step_screen() {
        let app = App::new(Box::new(LogSink));
        let screen = render(&app);
        assert!(screen.contains("My Zip Intake Form"));
        assert!(screen.contains("Step 1: Request details"));
        assert!(screen.contains("What are you purchasing?"));
        assert!(screen.contains("Asana"));
        assert!(screen.contains("Back"));
        assert!(screen.contains("Next"));
        assert!(!screen.contains("Submit"));
    }

    #[test]
    fn test_last_step_screen() {
        let mut app = App::new(Box::new(LogSink));
        app.state.form.handle_next();
        let screen = render(&app);
        assert!(screen.contains("Step 2: Contract details"));
        assert!(screen.contains("What are the terms of the contract?"));
        assert!(screen.contains("Submit"));
        assert!(!screen.contains("Next"));
    }

    #[test]
    fn test_error_dialog_is_drawn() {
        let mut app = App::new(Box::new(LogSink));
        app.state.push_error("Submission failed".to_string());
        let screen = render(&app);
        assert!(screen.contains("Submission failed"));
        assert!(screen.contains("to dismiss"));
    }
}

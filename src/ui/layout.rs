//! Layout components (form area, status bar)

use crate::app::App;
use crate::platform::{BACK_SHORTCUT, NEXT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, Step};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![Span::styled(
        format!(" {} ", app.sink_name()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::styled(
        format!(" {}", get_hints(form.step(), form.focus())),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current step and focus
fn get_hints(step: Step, focus: Focus) -> String {
    let nav = if step.is_last() {
        format!("{BACK_SHORTCUT}:back  {SUBMIT_SHORTCUT}:submit")
    } else if step.is_first() {
        format!("{NEXT_SHORTCUT}:next")
    } else {
        format!("{BACK_SHORTCUT}:back  {NEXT_SHORTCUT}:next")
    };

    let local = match focus {
        Focus::Field(field) if field.is_text() => "type to edit  ^U:clear",
        Focus::Field(_) => "←/→:vendor",
        Focus::Nav => "←/→:select  Enter:press",
    };

    format!("Tab:next field  {local}  {nav}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;

    #[test]
    fn test_first_step_hints_offer_next_only() {
        let hints = get_hints(Step::Details, Focus::Field(FieldId::RequestName));
        assert!(hints.contains("next"));
        assert!(!hints.contains("submit"));
        assert!(!hints.contains("back"));
    }

    #[test]
    fn test_last_step_hints_offer_submit() {
        let hints = get_hints(Step::Terms, Focus::Nav);
        assert!(hints.contains("submit"));
        assert!(hints.contains("back"));
        assert!(hints.contains("Enter:press"));
    }

    #[test]
    fn test_vendor_focus_hint() {
        let hints = get_hints(Step::Details, Focus::Field(FieldId::Vendor));
        assert!(hints.contains("vendor"));
    }
}

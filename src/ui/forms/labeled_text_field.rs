//! Labeled text input with an optional action button
//!
//! The field keeps no state of its own. It is rebuilt from the owner's
//! current values for every draw and every key press, and reports edits back
//! as [`FieldEvent`]s carrying the full new value.

use crate::platform::is_altgr;
use crate::ui::components::render_button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Label of the action button when none is given
pub const DEFAULT_BUTTON_LABEL: &str = "Add";

/// Height of a rendered field in rows
pub const FIELD_HEIGHT: u16 = 3;

/// What a key press did to the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value changed; carries the whole new string
    Changed(String),
    /// The action button was activated with this value
    Add(String),
}

#[derive(Debug, Clone)]
pub struct LabeledTextField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: Option<&'a str>,
    show_button: bool,
    button_label: &'a str,
}

impl<'a> LabeledTextField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: None,
            show_button: true,
            button_label: DEFAULT_BUTTON_LABEL,
        }
    }

    pub fn placeholder(mut self, placeholder: Option<&'a str>) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn show_button(mut self, show_button: bool) -> Self {
        self.show_button = show_button;
        self
    }

    #[allow(dead_code)]
    pub fn button_label(mut self, button_label: &'a str) -> Self {
        self.button_label = button_label;
        self
    }

    /// Translate a key press into a field event.
    ///
    /// Enter only produces [`FieldEvent::Add`] while the button is shown.
    pub fn handle_key(&self, key: KeyEvent) -> Option<FieldEvent> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL) && !is_altgr(&key);
        match key.code {
            KeyCode::Char('u') if ctrl => Some(FieldEvent::Changed(String::new())),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => {
                let mut next = self.value.to_string();
                next.push(c);
                Some(FieldEvent::Changed(next))
            }
            KeyCode::Backspace if !self.value.is_empty() => {
                let mut next = self.value.to_string();
                next.pop();
                Some(FieldEvent::Changed(next))
            }
            KeyCode::Enter if self.show_button => Some(FieldEvent::Add(self.value.to_string())),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, is_active: bool) {
        let (input_area, button_area) = if self.show_button {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(10),
                    Constraint::Length(self.button_label.chars().count() as u16 + 4),
                ])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let border_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = if self.value.is_empty() {
            let hint = self.placeholder.unwrap_or_default();
            vec![Span::styled(
                hint,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )]
        } else {
            vec![Span::raw(self.value)]
        };
        if is_active {
            let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
            if self.value.is_empty() {
                spans.insert(0, cursor);
            } else {
                spans.push(cursor);
            }
        }

        let block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .wrap(Wrap { trim: false })
                .block(block),
            input_area,
        );

        if let Some(button_area) = button_area {
            render_button(frame, button_area, self.button_label, is_active, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn rendered_text(field: &LabeledTextField, is_active: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                field.render(frame, area, is_active)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_defaults() {
        let field = LabeledTextField::new("Name", "");
        assert!(field.show_button);
        assert_eq!(field.button_label, "Add");
        assert!(field.placeholder.is_none());
    }

    #[test]
    fn test_typing_reports_full_value() {
        let field = LabeledTextField::new("Name", "Server renewa");
        assert_eq!(
            field.handle_key(key(KeyCode::Char('l'))),
            Some(FieldEvent::Changed("Server renewal".to_string()))
        );
    }

    #[test]
    fn test_shifted_char_is_kept() {
        let field = LabeledTextField::new("Name", "");
        let event = field.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(event, Some(FieldEvent::Changed("S".to_string())));
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let field = LabeledTextField::new("Name", "abc");
        assert_eq!(
            field.handle_key(key(KeyCode::Backspace)),
            Some(FieldEvent::Changed("ab".to_string()))
        );
        let empty = LabeledTextField::new("Name", "");
        assert_eq!(empty.handle_key(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let field = LabeledTextField::new("Name", "abc");
        let event = field.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(event, Some(FieldEvent::Changed(String::new())));
    }

    #[test]
    fn test_other_ctrl_chords_are_ignored() {
        let field = LabeledTextField::new("Name", "abc");
        let event = field.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(event, None);
    }

    #[test]
    fn test_altgr_char_is_typed() {
        let field = LabeledTextField::new("Name", "ops");
        let event = field.handle_key(KeyEvent::new(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        ));
        assert_eq!(event, Some(FieldEvent::Changed("ops@".to_string())));
    }

    #[test]
    fn test_enter_adds_current_value() {
        let field = LabeledTextField::new("Tag", "urgent");
        assert_eq!(
            field.handle_key(key(KeyCode::Enter)),
            Some(FieldEvent::Add("urgent".to_string()))
        );
    }

    #[test]
    fn test_enter_without_button_does_nothing() {
        let field = LabeledTextField::new("Tag", "urgent").show_button(false);
        assert_eq!(field.handle_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_renders_placeholder_when_empty() {
        let field = LabeledTextField::new("Terms", "")
            .placeholder(Some("E.g. 3 year contract"))
            .show_button(false);
        let text = rendered_text(&field, false);
        assert!(text.contains("Terms"));
        assert!(text.contains("E.g. 3 year contract"));
    }

    #[test]
    fn test_renders_value_instead_of_placeholder() {
        let field = LabeledTextField::new("Terms", "1 year")
            .placeholder(Some("E.g. 3 year contract"))
            .show_button(false);
        let text = rendered_text(&field, true);
        assert!(text.contains("1 year"));
        assert!(!text.contains("E.g."));
    }

    #[test]
    fn test_renders_button_label() {
        let with_button = LabeledTextField::new("Tag", "").button_label("Attach");
        assert!(rendered_text(&with_button, false).contains("Attach"));

        let without = LabeledTextField::new("Tag", "").show_button(false);
        assert!(!rendered_text(&without, false).contains("Add"));
    }
}

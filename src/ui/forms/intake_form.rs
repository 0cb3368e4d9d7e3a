//! Intake form rendering

use super::labeled_text_field::{LabeledTextField, FIELD_HEIGHT};
use super::vendor_select::draw_select;
use crate::state::{NavAction, NavButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::ui::view::{FieldView, FormView, NavView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of a navigation button
const NAV_BUTTON_WIDTH: u16 = 12;

/// Draw the whole form for the current step
pub fn draw(frame: &mut Frame, area: Rect, view: &FormView) {
    let block = Block::default()
        .title(format!(" {} ", view.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // Heading
    constraints.extend(view.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Navigation

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    draw_heading(frame, chunks[0], view);

    for (idx, field) in view.fields.iter().enumerate() {
        draw_question(frame, chunks[idx + 1], field);
    }

    draw_nav(frame, chunks[chunks.len() - 1], &view.nav);
}

fn draw_heading(frame: &mut Frame, area: Rect, view: &FormView) {
    let heading = Paragraph::new(Line::from(vec![
        Span::styled(
            view.heading,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", view.progress),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(heading, area);
}

fn draw_question(frame: &mut Frame, area: Rect, field: &FieldView) {
    match field {
        FieldView::Text {
            question,
            value,
            placeholder,
            focused,
            ..
        } => LabeledTextField::new(question, value)
            .placeholder(*placeholder)
            .show_button(false)
            .render(frame, area, *focused),
        FieldView::Select {
            question,
            options,
            selected,
            focused,
            ..
        } => draw_select(frame, area, question, options, *selected, *focused),
    }
}

fn draw_nav(frame: &mut Frame, area: Rect, nav: &NavView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(NAV_BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(NAV_BUTTON_WIDTH),
        ])
        .split(area);

    if nav.shows(NavAction::Back) {
        render_action_button(
            frame,
            chunks[0],
            NavAction::Back.label(),
            nav.focused && nav.selected == NavButton::Back,
            nav.back_enabled,
            None,
        );
    }

    // Next and Submit share the primary slot; only one is ever shown
    for action in [NavAction::Next, NavAction::Submit] {
        if !nav.shows(action) {
            continue;
        }
        let color = match action {
            NavAction::Submit => Color::Green,
            _ => Color::Cyan,
        };
        render_action_button(
            frame,
            chunks[2],
            action.label(),
            nav.focused && nav.selected == NavButton::Primary,
            true,
            Some(color),
        );
    }
}

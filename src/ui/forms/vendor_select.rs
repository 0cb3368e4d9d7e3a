//! Single-select control rendered as a row of options

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw `options` in one row with `selected` highlighted
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    options: &[&str],
    selected: usize,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = Vec::with_capacity(options.len() * 2 + 2);
    if is_active {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }
    for (idx, option) in options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if idx == selected {
            Style::default()
                .fg(Color::Black)
                .bg(if is_active { Color::Cyan } else { Color::Gray })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {option} "), style));
    }
    if is_active {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

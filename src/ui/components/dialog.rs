//! Modal error dialog

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Widest the dialog grows, borders included
const MAX_DIALOG_WIDTH: u16 = 60;

const DISMISS_HINT: &str = "Press Enter or Esc to dismiss";

/// Narrowest the dialog gets; keeps the dismiss hint on one row
const MIN_DIALOG_WIDTH: u16 = DISMISS_HINT.len() as u16 + 4;

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", key_style),
            Span::raw(" or "),
            Span::styled("Esc", key_style),
            Span::raw(" to dismiss"),
        ]),
    ];

    let message_width = message.chars().count().min(MAX_DIALOG_WIDTH as usize) as u16;
    let width = (message_width + 4).clamp(MIN_DIALOG_WIDTH, MAX_DIALOG_WIDTH);
    let inner_width = width - 2;
    // Borders, title and two blank rows, plus whatever the wrapped lines need
    let height =
        5 + wrapped_rows(message, inner_width) + wrapped_rows(DISMISS_HINT, inner_width);

    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, area);
}

/// Rows `text` takes when word-wrapped to `width` columns
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut rows = 1;
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if line_len == 0 { len } else { line_len + 1 + len };
        if needed <= width {
            line_len = needed;
            continue;
        }
        if line_len > 0 {
            rows += 1;
        }
        // Words longer than a row are split across rows
        rows += (len - 1) / width;
        line_len = (len - 1) % width + 1;
    }
    rows as u16
}

/// Rect of at most `width` x `height` centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

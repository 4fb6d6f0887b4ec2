//! Field rendering utilities for forms

use crate::state::{ErrorNode, FieldView};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw an input from its projection
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let is_active = field.is_active;

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.as_str(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the inline error line under an input; empty when the field passes
pub fn draw_error(frame: &mut Frame, area: Rect, error: Option<&ErrorNode>) {
    let Some(error) = error else {
        return;
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            error.message.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the key binding help line
pub fn draw_help_text(frame: &mut Frame, area: Rect, submit_focused: bool) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
    ];
    if submit_focused {
        spans.push(Span::styled("Enter", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(": submit  "));
    } else {
        spans.push(Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw(": submit  "));
    }
    spans.push(Span::styled("Esc", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw(": quit"));

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

//! Layout components (main area, status bar)

use crate::app::App;
use crate::state::{FormMode, SubmitOutcome};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar
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

/// Draw the status bar: mode, last submit feedback, quit hint
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (mode_label, mode_color) = match app.form.mode() {
        FormMode::Editing => ("EDITING", Color::Yellow),
        FormMode::Submitted => ("SUBMITTED", Color::Green),
    };

    let mut spans = vec![Span::styled(
        format!(" {mode_label} "),
        Style::default().fg(Color::Black).bg(mode_color),
    )];

    let error_count = app.view().error_nodes().len();
    if error_count > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{error_count} invalid"),
            Style::default().fg(Color::Red),
        ));
    }

    if let (Some(outcome), Some(msg)) = (app.last_submit, app.status_message()) {
        let color = match outcome {
            SubmitOutcome::Accepted => Color::Green,
            SubmitOutcome::Rejected { .. } => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
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

//! Contact form rendering

use super::field_renderer::{draw_error, draw_field, draw_help_text};
use super::summary::{draw_summary, summary_height};
use crate::state::FormView;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of a single-line input (borders + content)
const INPUT_HEIGHT: u16 = 3;
/// Height of the multiline message input
const MESSAGE_HEIGHT: u16 = 6;
/// One row under every input is reserved for its error so the layout does not jump
const ERROR_HEIGHT: u16 = 1;

/// Draw the contact form, its inline errors and the summary panel
pub fn draw_contact_form(frame: &mut Frame, area: Rect, view: &FormView, show_help: bool) {
    let block = Block::default()
        .title(format!(" {} ", view.heading))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = Vec::new();
    for field in &view.fields {
        let height = if field.is_multiline {
            MESSAGE_HEIGHT
        } else {
            INPUT_HEIGHT
        };
        constraints.push(Constraint::Length(height));
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    if let Some(summary) = &view.summary {
        constraints.push(Constraint::Length(summary_height(
            summary,
            area.width.saturating_sub(2), // layout margin
        )));
    }
    constraints.push(Constraint::Min(0));
    if show_help {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (idx, field) in view.fields.iter().enumerate() {
        draw_field(frame, chunks[idx * 2], field);
        draw_error(frame, chunks[idx * 2 + 1], field.error.as_ref());
    }

    let mut next = view.fields.len() * 2;

    let button_area = Rect {
        width: chunks[next].width.min(12),
        ..chunks[next]
    };
    render_button(frame, button_area, view.submit_label, view.submit_focused);
    next += 1;

    if let Some(summary) = &view.summary {
        draw_summary(frame, chunks[next], summary);
    }

    if show_help {
        if let Some(help_area) = chunks.last() {
            draw_help_text(frame, *help_area, view.submit_focused);
        }
    }
}

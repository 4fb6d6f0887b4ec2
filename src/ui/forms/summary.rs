//! Submission summary panel

use crate::state::SummaryView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows the panel needs at `width` columns, including its borders
pub fn summary_height(summary: &SummaryView, width: u16) -> u16 {
    let rows = summary_lines(summary, inner_width(width)).len();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Draw one labelled line per submitted value; wrapped and continuation lines are indented
pub fn draw_summary(frame: &mut Frame, area: Rect, summary: &SummaryView) {
    let block = Block::default()
        .title(format!(" Submitted at {} ", summary.submitted_at))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = summary_lines(summary, inner_width(area.width));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn inner_width(width: u16) -> usize {
    usize::from(width.saturating_sub(2))
}

/// Pre-wrapped summary lines so the panel height and the drawn rows always agree
fn summary_lines(summary: &SummaryView, width: usize) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for node in &summary.nodes {
        let prefix = format!("{}: ", node.label);
        let indent = " ".repeat(prefix.chars().count());
        let text_width = width.saturating_sub(indent.len()).max(1);

        let rows = node
            .text
            .split('\n')
            .flat_map(|paragraph| wrap_text(paragraph, text_width));
        for (idx, row) in rows.enumerate() {
            let lead = if idx == 0 {
                Span::styled(prefix.clone(), label_style)
            } else {
                Span::raw(indent.clone())
            };
            lines.push(Line::from(vec![lead, Span::raw(row)]));
        }
    }
    lines
}

/// Wrap one paragraph at word boundaries; words wider than a row are split
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split(' ') {
        let mut word: Vec<char> = word.chars().collect();
        let sep = usize::from(current_len > 0);
        if current_len > 0 && current_len + sep + word.len() > max_width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        } else if sep == 1 {
            current.push(' ');
            current_len += 1;
        }
        while word.len() > max_width {
            let rest = word.split_off(max_width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        current_len += word.len();
        current.extend(word);
    }
    lines.push(current);
    lines
}

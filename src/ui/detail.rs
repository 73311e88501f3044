//! Detail overlay rendering.
//!
//! Displays a modal overlay with the untruncated values of the selected
//! message and the model's rationale.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::common::panel;
use crate::app::App;
use crate::render::view::Cell;
use crate::render::MessageRow;

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 50;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 16;

/// Render the selected message as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, row: Option<&MessageRow>, area: Rect) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }
    let Some(row) = row else {
        return;
    };

    let overlay_width = (area.width * 90 / 100).clamp(MIN_OVERLAY_WIDTH, 110);
    let overlay_height = (area.height * 80 / 100).clamp(MIN_OVERLAY_HEIGHT, 40);
    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    frame.render_widget(Clear, overlay_area);

    let chunks = Layout::vertical([
        Constraint::Length(8), // Fields
        Constraint::Min(4),    // Message text
        Constraint::Length(5), // Rationale
    ])
    .split(overlay_area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let field = |label: &'static str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(format!(" {:<12}", label), Style::default().add_modifier(Modifier::DIM)),
            Span::styled(value, style),
        ])
    };

    let fields = vec![
        field("Time", full(&row.time), bold),
        field("Channel", full(&row.channel), bold),
        field("Sender", full(&row.sender), Style::default()),
        field("Decision", row.decision.label().to_string(), app.theme.decision_style(row.decision)),
        field("Confidence", row.confidence.clone(), app.theme.tier_style(row.tier)),
        field("Token", full(&row.token), Style::default().fg(app.theme.highlight)),
    ];

    let header_block = Block::default()
        .title(" Message Detail ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));
    frame.render_widget(Paragraph::new(fields).block(header_block), chunks[0]);

    let text = Paragraph::new(full(&row.text))
        .wrap(Wrap { trim: false })
        .block(panel(app, " Message ".into()));
    frame.render_widget(text, chunks[1]);

    let rationale = match row.rationale.as_deref() {
        Some(r) if !r.is_empty() => Line::from(r.to_string()),
        _ => Line::from(Span::styled("No rationale", Style::default().add_modifier(Modifier::DIM))),
    };
    let rationale = Paragraph::new(rationale)
        .wrap(Wrap { trim: true })
        .block(panel(app, " Rationale ".into()));
    frame.render_widget(rationale, chunks[2]);
}

fn full(cell: &Cell) -> String {
    cell.detail.clone().unwrap_or_else(|| cell.text.clone())
}

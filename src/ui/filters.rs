//! Filter bar rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::data::FilterKey;
use crate::render::FilterBarView;

/// Render the filter controls and the filters currently applied.
pub fn render(frame: &mut Frame, app: &App, filters: &FilterBarView, area: Rect) {
    let control = |key: FilterKey, hotkey: &'static str, value: &str| {
        let style = if value == "any" {
            Style::default().fg(app.theme.muted)
        } else {
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD)
        };
        vec![
            Span::styled(hotkey, Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!("{}: ", key.label())),
            Span::styled(format!("[{}]", value), style),
            Span::raw("  "),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    spans.extend(control(FilterKey::Decision, "d ", &filters.decision));
    spans.extend(control(FilterKey::Channel, "c ", &filters.channel));
    spans.extend(control(FilterKey::MinConfidence, "m ", &filters.min_confidence));
    spans.push(Span::raw("│ Applied: "));
    spans.push(Span::styled(filters.active.clone(), Style::default().add_modifier(Modifier::BOLD)));

    if let Some(ref err) = filters.channel_error {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(err.clone(), app.theme.error_style()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

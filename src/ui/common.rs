//! Common UI components shared across regions.
//!
//! This module contains the header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, TITLE};

/// Render the header bar.
///
/// Displays: title, API endpoint, time since the last successful load.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let updated = match app.controller.last_updated() {
        Some(at) => format!("Updated {:.1}s ago", at.elapsed().as_secs_f64()),
        None => "Loading...".to_string(),
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", TITLE.to_uppercase()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(app.source_description().to_string(), Style::default().fg(app.theme.highlight)),
        Span::raw(" │ "),
        Span::raw(updated),
    ];
    if app.is_loading() {
        spans.push(Span::styled(" ⟳", Style::default().fg(app.theme.muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status bar at the bottom.
///
/// Shows a temporary status message when one is set, otherwise the
/// available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.show_detail_overlay {
        " ↑↓:select Esc:close q:quit"
    } else {
        " d/c/m:filters a:apply x:clear ←→:page ↑↓:select i:detail r:reload e:export ?:help q:quit"
    };

    let paragraph = Paragraph::new(controls).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(title, Style::default().add_modifier(Modifier::BOLD))])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Filters"),
        Line::from("  d         Cycle decision"),
        Line::from("  c         Cycle channel"),
        Line::from("  m         Cycle min confidence"),
        Line::from("  Enter/a   Apply filters"),
        Line::from("  x         Clear filters"),
        Line::from(""),
        section(" Messages"),
        Line::from("  ←/→ p/n   Previous/next page"),
        Line::from("  ↑/↓ k/j   Select row"),
        Line::from("  i         Message detail"),
        Line::from("  Esc       Close overlay"),
        Line::from(""),
        section(" General"),
        Line::from("  r         Reload data"),
        Line::from("  e         Export to HTML"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// A bordered block in the theme's style.
pub fn panel(app: &App, title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
}

/// Placeholder lines for a region that is loading or failed.
pub fn placeholder(app: &App, text: &str, is_error: bool) -> Paragraph<'static> {
    let style = if is_error {
        app.theme.error_style()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    Paragraph::new(vec![Line::from(""), Line::from(Span::styled(format!("  {}", text), style))])
}

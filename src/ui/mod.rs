//! Terminal rendering using ratatui.
//!
//! Every frame draws from a single [`DashboardView`](crate::render::DashboardView)
//! built from the controller, so the widgets here only decide layout and
//! styling.

pub mod chart;
pub mod common;
pub mod detail;
pub mod filters;
pub mod messages;
pub mod stats;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Draw the whole dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.neutral));
        let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5.min(area.height));
        frame.render_widget(paragraph, centered);
        return;
    }

    let view = app.view();

    let chunks = Layout::vertical([
        Constraint::Length(1),  // Header bar
        Constraint::Length(1),  // Filter bar
        Constraint::Length(3),  // Stat cards
        Constraint::Length(10), // Signals and chart
        Constraint::Min(8),     // Message table
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    filters::render(frame, app, &view.filters, chunks[1]);
    stats::render_cards(frame, app, &view.stats, chunks[2]);

    let middle = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    stats::render_signals(frame, app, &view.signals, middle[0]);
    chart::render(frame, app, view.chart.as_ref(), middle[1]);

    messages::render(frame, app, &view.messages, view.pagination.as_ref(), chunks[4]);
    common::render_status_bar(frame, app, chunks[5]);

    if app.show_detail_overlay {
        let row = view.messages.ready().and_then(|t| t.rows().get(app.selected_row));
        detail::render_overlay(frame, app, row, area);
    }

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Loader;
    use crate::render::view::NO_MESSAGES;
    use crate::testing::FakeApi;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::runtime::Handle;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    fn buffer_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    async fn loaded_app(api: FakeApi) -> App {
        let loader = Loader::new(Arc::new(api), Handle::current());
        let mut app = App::new(loader, 20, Duration::from_secs(3600), Theme::dark());
        app.start();
        for _ in 0..100 {
            tokio::task::yield_now().await;
            app.tick();
            if !app.is_loading() {
                break;
            }
        }
        app
    }

    #[tokio::test]
    async fn test_renders_loaded_dashboard() {
        let app = loaded_app(FakeApi::default()).await;

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("1,234"));
        assert!(text.contains("Recent Buy Signals"));
        assert!(text.contains("1-20 of 45"));
        assert!(text.contains("message number 0"));
    }

    #[tokio::test]
    async fn test_empty_message_table_shows_panel_placeholder() {
        let app = loaded_app(FakeApi {
            total_messages: 0,
            ..Default::default()
        })
        .await;

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        let rows = buffer_rows(&terminal);
        let line = rows
            .iter()
            .find(|row| row.contains(NO_MESSAGES))
            .expect("placeholder is drawn");
        // Starts at the panel's left edge, not inside the Message column
        assert!(line.starts_with(&format!("│  {}", NO_MESSAGES)));
        assert!(!rows.iter().any(|row| row.contains("Sender") && row.contains("Decision")));
    }

    #[tokio::test]
    async fn test_small_terminal_shows_resize_hint() {
        let loader = Loader::new(Arc::new(FakeApi::default()), Handle::current());
        let app = App::new(loader, 20, Duration::from_secs(3600), Theme::dark());

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("Terminal too small"));
    }
}

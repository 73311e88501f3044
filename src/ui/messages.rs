//! Message table rendering.
//!
//! Shows one page of messages with decision and confidence styling, the
//! row cursor, and the pagination footer.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Row, Table, TableState},
    Frame,
};

use super::common::{panel, placeholder};
use crate::app::App;
use crate::render::view::{NO_MESSAGES, TABLE_COLUMNS};
use crate::render::{MessageRow, MessageTable, PaginationView, RegionView};

/// Render the message table for the current page.
pub fn render(
    frame: &mut Frame,
    app: &App,
    messages: &RegionView<MessageTable>,
    pagination: Option<&PaginationView>,
    area: Rect,
) {
    let mut block = panel(app, " Messages ".into());
    if let Some(pagination) = pagination {
        block = block.title_bottom(footer(app, pagination));
    }

    let rows = match messages {
        RegionView::Loading => {
            frame.render_widget(placeholder(app, "Loading messages...", false).block(block), area);
            return;
        }
        RegionView::Error(msg) => {
            frame.render_widget(placeholder(app, msg, true).block(block), area);
            return;
        }
        RegionView::Ready(MessageTable::Empty) => {
            frame.render_widget(placeholder(app, NO_MESSAGES, false).block(block), area);
            return;
        }
        RegionView::Ready(MessageTable::Rows(rows)) => rows,
    };

    let header = Row::new(TABLE_COLUMNS.iter().map(|c| Cell::from(*c)))
        .height(1)
        .style(app.theme.header);

    let widths = [
        Constraint::Length(10), // Time
        Constraint::Length(18), // Channel
        Constraint::Length(15), // Sender
        Constraint::Fill(1),    // Message
        Constraint::Length(9),  // Decision
        Constraint::Length(11), // Confidence
        Constraint::Length(16), // Token
    ];

    let table_rows: Vec<Row> = rows.iter().map(|row| message_row(app, row)).collect();

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_row));

    frame.render_stateful_widget(table, area, &mut state);
}

fn message_row(app: &App, row: &MessageRow) -> Row<'static> {
    Row::new(vec![
        Cell::from(row.time.text.clone()),
        Cell::from(row.channel.text.clone()),
        Cell::from(row.sender.text.clone()),
        Cell::from(row.text.text.clone()),
        Cell::from(row.decision.label()).style(app.theme.decision_style(row.decision)),
        Cell::from(row.confidence.clone()).style(app.theme.tier_style(row.tier)),
        Cell::from(row.token.text.clone()).style(Style::default().fg(app.theme.muted)),
    ])
}

/// "‹ prev │ 21-40 of 45 │ Page 2 of 3 │ next ›" with disabled controls dimmed.
fn footer(app: &App, pagination: &PaginationView) -> Line<'static> {
    Line::from(vec![
        Span::styled(" ‹ prev ", app.theme.control_style(pagination.prev_enabled)),
        Span::raw("│ "),
        Span::raw(pagination.range.clone()),
        Span::raw(" │ "),
        Span::raw(pagination.page.clone()),
        Span::raw(" │"),
        Span::styled(" next › ", app.theme.control_style(pagination.next_enabled)),
    ])
}

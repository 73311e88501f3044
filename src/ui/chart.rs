//! Channel activity chart.
//!
//! Each channel is drawn as a horizontal bar proportional to its share of
//! the total message count, followed by its label.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{panel, placeholder};
use crate::app::App;
use crate::data::format::truncate;
use crate::render::ChartView;

/// Width reserved for channel names in front of each bar.
const NAME_WIDTH: usize = 14;

const PALETTE: [Color; 6] =
    [Color::Cyan, Color::Magenta, Color::Green, Color::Yellow, Color::Blue, Color::Red];

/// Render the chart, or an empty panel when there is none.
pub fn render(frame: &mut Frame, app: &App, chart: Option<&ChartView>, area: Rect) {
    let block = panel(app, " Channel Activity ".into());

    let Some(chart) = chart else {
        frame.render_widget(placeholder(app, "No channel activity", false).block(block), area);
        return;
    };

    // Borders take two columns; the rest is split between name and bar
    let bar_width = (area.width as usize).saturating_sub(NAME_WIDTH + 4).max(1);

    let lines: Vec<Line> = chart
        .slices
        .iter()
        .enumerate()
        .flat_map(|(i, slice)| {
            let filled = bar_cells(slice.share, bar_width);
            let color = PALETTE[i % PALETTE.len()];
            vec![
                Line::from(vec![
                    Span::raw(format!(
                        "{:<width$} ",
                        truncate(&slice.name, NAME_WIDTH - 3),
                        width = NAME_WIDTH
                    )),
                    Span::styled("█".repeat(filled), Style::default().fg(color)),
                    Span::styled(
                        "░".repeat(bar_width - filled),
                        Style::default().fg(app.theme.muted),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("{:width$} {}", "", slice.label, width = NAME_WIDTH),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Number of filled cells for a share in `[0, 1]`.
fn bar_cells(share: f64, width: usize) -> usize {
    ((share.clamp(0.0, 1.0) * width as f64).round() as usize).min(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(0.75, 20), 15);
        assert_eq!(bar_cells(0.0, 20), 0);
        assert_eq!(bar_cells(1.0, 7), 7);
    }
}

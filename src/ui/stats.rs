//! Statistic cards and the recent buy-signal feed.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::common::{panel, placeholder};
use crate::app::App;
use crate::render::view::NO_SIGNALS;
use crate::render::{RegionView, SignalFeed, SignalItem, StatCards};

/// Render the five statistic cards side by side.
pub fn render_cards(frame: &mut Frame, app: &App, stats: &RegionView<StatCards>, area: Rect) {
    let cards = match stats {
        RegionView::Ready(cards) => cards,
        RegionView::Loading => {
            frame.render_widget(
                placeholder(app, "Loading statistics...", false).block(panel(app, " Stats ".into())),
                area,
            );
            return;
        }
        RegionView::Error(msg) => {
            frame.render_widget(
                placeholder(app, msg, true).block(panel(app, " Stats ".into())),
                area,
            );
            return;
        }
    };

    let chunks = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);
    for ((label, value), chunk) in cards.entries().into_iter().zip(chunks.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(panel(app, format!(" {} ", label)));
        frame.render_widget(card, *chunk);
    }
}

/// Render the list of recent buy signals.
pub fn render_signals(frame: &mut Frame, app: &App, signals: &RegionView<SignalFeed>, area: Rect) {
    let block = panel(app, " Recent Buy Signals ".into());

    let items = match signals {
        RegionView::Loading => {
            frame.render_widget(placeholder(app, "Loading...", false).block(block), area);
            return;
        }
        RegionView::Error(msg) => {
            frame.render_widget(placeholder(app, msg, true).block(block), area);
            return;
        }
        RegionView::Ready(SignalFeed::Empty) => {
            frame.render_widget(placeholder(app, NO_SIGNALS, false).block(block), area);
            return;
        }
        RegionView::Ready(SignalFeed::Signals(items)) => items,
    };

    let list: Vec<ListItem> = items.iter().map(|item| signal_item(app, item)).collect();
    frame.render_widget(List::new(list).block(block), area);
}

fn signal_item(app: &App, item: &SignalItem) -> ListItem<'static> {
    let dim = Style::default().add_modifier(Modifier::DIM);

    let mut header = vec![
        Span::styled(item.channel.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!(" · {} · {}", item.sender, item.time.text), dim),
        Span::raw(" "),
        Span::styled(item.confidence.clone(), app.theme.tier_style(item.tier)),
    ];
    if let Some(ref token) = item.token {
        header.push(Span::styled(format!(" {}", token), Style::default().fg(app.theme.muted)));
    }

    ListItem::new(vec![Line::from(header), Line::from(format!("  {}", item.text))])
}

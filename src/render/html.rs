//! Standalone HTML snapshot of the dashboard.
//!
//! The document is an askama template (`templates/dashboard.html`). Every
//! value interpolated from the view goes through askama's HTML escaping, so
//! message content can never inject markup.

use askama::Template;

use super::view::{DashboardView, MessageTable, RegionView, SignalFeed};
use super::view::{NO_MESSAGES, NO_SIGNALS, TABLE_COLUMNS};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub view: &'a DashboardView,
    pub title: &'a str,
    columns: [&'static str; 7],
    no_signals: &'static str,
    no_messages: &'static str,
}

impl<'a> DashboardTemplate<'a> {
    pub fn new(view: &'a DashboardView, title: &'a str) -> Self {
        Self {
            view,
            title,
            columns: TABLE_COLUMNS,
            no_signals: NO_SIGNALS,
            no_messages: NO_MESSAGES,
        }
    }
}

/// Render a complete HTML document for `view`.
pub fn render_document(view: &DashboardView, title: &str) -> Result<String, askama::Error> {
    DashboardTemplate::new(view, title).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MessagePage};
    use crate::controller::{DashboardController, LoadOutcome};
    use crate::testing::{message_page, sample_message, sample_stats};
    use chrono::{DateTime, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn loaded_view(page: MessagePage) -> DashboardView {
        let mut controller = DashboardController::default();
        let requests = controller.initial_load();
        controller.apply(LoadOutcome::Stats(requests[0].ticket(), Ok(sample_stats())));
        controller.apply(LoadOutcome::Channels(requests[1].ticket(), Ok(vec![])));
        controller.apply(LoadOutcome::Messages(requests[2].ticket(), Ok(page)));
        DashboardView::build(&controller, now())
    }

    fn render(view: &DashboardView) -> String {
        render_document(view, "Moonitor").unwrap()
    }

    #[test]
    fn test_message_text_is_escaped() {
        let mut message = sample_message(0);
        message.message_text = Some("<img src=x onerror=alert(1)>".to_string());
        let html = render(&loaded_view(MessagePage {
            messages: vec![message],
            ..message_page(1, 1)
        }));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn test_quotes_cannot_break_out_of_title_attribute() {
        let mut message = sample_message(0);
        message.channel_name = Some(r#"x" onmouseover="alert('hi')"#.to_string());
        let html = render(&loaded_view(MessagePage {
            messages: vec![message],
            ..message_page(1, 1)
        }));
        assert!(!html.contains(r#"" onmouseover=""#));
        assert!(!html.contains("'hi'"));
    }

    #[test]
    fn test_signal_text_is_escaped() {
        let html = render(&loaded_view(message_page(1, 3)));
        assert!(html.contains("&lt;b&gt;ape"));
        assert!(html.contains("&amp; hold"));
        assert!(!html.contains("<b>ape"));
    }

    #[test]
    fn test_loading_regions_render_placeholders() {
        let view = DashboardView::build(&DashboardController::default(), now());
        let html = render(&view);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Moonitor</title>"));
        assert!(html.contains("Loading..."));
        assert!(!html.contains("id=\"pagination\""));
    }

    #[test]
    fn test_empty_signals_show_only_placeholder() {
        let mut view = loaded_view(message_page(1, 3));
        view.signals = RegionView::Ready(SignalFeed::Empty);
        let html = render(&view);
        assert!(html.contains(NO_SIGNALS));
        assert!(!html.contains("class=\"signal\""));
    }

    #[test]
    fn test_empty_table_placeholder_spans_all_columns() {
        let html = render(&loaded_view(message_page(1, 0)));
        assert!(html.contains(&format!("colspan=\"7\" class=\"placeholder\">{}", NO_MESSAGES)));
        assert!(html.contains("0-0 of 0"));
    }

    #[test]
    fn test_region_error_is_rendered_in_place() {
        let mut view = loaded_view(message_page(1, 3));
        view.stats = RegionView::Error(format!(
            "Failed to load statistics: {}",
            ApiError::Http { status: 500 }
        ));
        let html = render(&view);
        assert!(html.contains("<p class=\"error\">Failed to load statistics: API returned status 500</p>"));
        // The other regions still render their data
        assert!(html.contains("message number 0"));
    }

    #[test]
    fn test_message_row_styles_and_details() {
        let html = render(&loaded_view(message_page(1, 3)));
        assert!(html.contains("<span class=\"decision-buy\">BUY</span>"));
        assert!(html.contains("<span class=\"confidence-high\">75%</span>"));
        assert!(html.contains("title=\"a channel with a long name\""));
    }

    #[test]
    fn test_chart_hover_labels() {
        let html = render(&loaded_view(message_page(1, 3)));
        assert!(html.contains("title=\"alpha calls: 3 (75.0%)\""));
        assert!(html.contains("title=\"beta: 1 (25.0%)\""));
        assert!(html.contains("width: 75.0%"));
    }

    #[test]
    fn test_missing_chart_leaves_area_blank() {
        let mut view = loaded_view(message_page(1, 3));
        view.chart = None;
        assert!(!render(&view).contains("<ul"));
    }

    #[test]
    fn test_pagination_disabled_state() {
        let html = render(&loaded_view(message_page(3, 45)));
        assert!(html.contains("41-45 of 45"));
        assert!(html.contains("<span class=\"disabled\">Next &raquo;</span>"));
        assert!(html.contains("<span>&laquo; Prev</span>"));
    }
}

//! Application state and interaction logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::api::Message;
use crate::controller::{DashboardController, LoadRequest};
use crate::loader::Loader;
use crate::render::{html, DashboardView};
use crate::ui::Theme;

/// Title used in the header bar and exported documents.
pub const TITLE: &str = "Moonitor Dashboard";

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    pub controller: DashboardController,
    loader: Loader,

    /// Selected row of the message table.
    pub selected_row: usize,

    refresh_interval: Duration,
    last_refresh: Instant,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App that loads through `loader`.
    pub fn new(loader: Loader, per_page: u32, refresh_interval: Duration, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            show_detail_overlay: false,
            controller: DashboardController::new(per_page),
            loader,
            selected_row: 0,
            refresh_interval,
            last_refresh: Instant::now(),
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the API backend.
    pub fn source_description(&self) -> &str {
        self.loader.description()
    }

    /// True while any request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loader.in_flight() > 0
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Kick off the initial load of every region.
    pub fn start(&mut self) {
        info!(source = self.loader.description(), "starting initial load");
        let requests = self.controller.initial_load();
        self.loader.dispatch_all(requests);
        self.last_refresh = Instant::now();
    }

    /// Apply finished requests and trigger the periodic refresh when due.
    ///
    /// Returns true if any response was applied.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.loader.poll() {
            changed |= self.controller.apply(outcome);
        }
        if changed {
            self.clamp_selection();
        }

        if self.last_refresh.elapsed() >= self.refresh_interval {
            self.reload();
        }
        changed
    }

    /// Re-request stats and messages with the current filters and page.
    pub fn reload(&mut self) {
        let requests = self.controller.refresh();
        self.loader.dispatch_all(requests);
        self.last_refresh = Instant::now();
    }

    pub fn apply_filters(&mut self) {
        let request = self.controller.apply_filters();
        self.dispatch_messages(request);
    }

    pub fn clear_filters(&mut self) {
        let request = self.controller.clear_filters();
        self.dispatch_messages(request);
    }

    pub fn next_page(&mut self) {
        if let Some(request) = self.controller.change_page(1) {
            self.dispatch_messages(request);
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(request) = self.controller.change_page(-1) {
            self.dispatch_messages(request);
        }
    }

    fn dispatch_messages(&mut self, request: LoadRequest) {
        self.selected_row = 0;
        self.show_detail_overlay = false;
        self.loader.dispatch(request);
    }

    pub fn cycle_decision(&mut self) {
        self.controller.controls_mut().cycle_decision();
    }

    pub fn cycle_channel(&mut self) {
        let channels = self.controller.channel_names().to_vec();
        self.controller.controls_mut().cycle_channel(&channels);
    }

    pub fn cycle_min_confidence(&mut self) {
        self.controller.controls_mut().cycle_min_confidence();
    }

    /// Describe the dashboard as of now.
    pub fn view(&self) -> DashboardView {
        DashboardView::build(&self.controller, Utc::now())
    }

    fn row_count(&self) -> usize {
        self.controller.messages().ready().map_or(0, |page| page.messages.len())
    }

    fn clamp_selection(&mut self) {
        self.selected_row = self.selected_row.min(self.row_count().saturating_sub(1));
    }

    /// The message under the table cursor.
    pub fn selected_message(&self) -> Option<&Message> {
        self.controller.messages().ready()?.messages.get(self.selected_row)
    }

    /// Move selection down by one row.
    pub fn select_next(&mut self) {
        let max = self.row_count().saturating_sub(1);
        self.selected_row = (self.selected_row + 1).min(max);
    }

    /// Move selection up by one row.
    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Open the detail overlay for the selected message.
    pub fn enter_detail(&mut self) {
        if self.selected_message().is_some() {
            self.show_detail_overlay = true;
        }
    }

    /// Close the detail overlay if open.
    pub fn close_overlay(&mut self) {
        self.show_detail_overlay = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Write the current dashboard to an HTML file.
    pub fn export_html(&self, path: &Path) -> Result<()> {
        let document = html::render_document(&self.view(), TITLE)?;
        std::fs::write(path, document)?;
        info!(path = %path.display(), "exported dashboard snapshot");
        Ok(())
    }
}

//! Dashboard controller: client-side state and its transitions.
//!
//! The controller never performs I/O. Every transition that needs data
//! returns one or more [`LoadRequest`]s for the caller to execute (see
//! [`crate::loader`]); completed requests come back as [`LoadOutcome`]s and
//! are applied with [`DashboardController::apply`].
//!
//! ```text
//!   initial_load / refresh / apply_filters / clear_filters / change_page
//!        │
//!        ▼
//!   LoadRequest (ticket: region + sequence number)
//!        │  executed by the Loader
//!        ▼
//!   LoadOutcome ──▶ apply() ──▶ region state (Ready | Failed)
//! ```
//!
//! Each region (stats, channels, messages) has its own monotonically
//! increasing sequence number. Only the outcome of the most recently issued
//! request for a region is applied; older responses that arrive late are
//! dropped.

use std::fmt;
use std::time::Instant;

use tracing::{debug, warn};

use crate::api::{ApiError, ChannelCount, MessagePage, MessageQuery, Pagination, StatsSummary};
use crate::data::{ChannelChart, FilterControls, FilterSet, PageStatus};

/// An independently loaded part of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Stats,
    Channels,
    Messages,
}

impl Region {
    /// Noun used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Stats => "statistics",
            Region::Channels => "channels",
            Region::Messages => "messages",
        }
    }

    fn error_message(&self, err: &ApiError) -> String {
        format!("Failed to load {}: {}", self.label(), err)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub region: Region,
    pub seq: u64,
}

/// A query the controller wants executed.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadRequest {
    Stats(Ticket),
    Channels(Ticket),
    Messages(Ticket, MessageQuery),
}

impl LoadRequest {
    pub fn ticket(&self) -> Ticket {
        match self {
            LoadRequest::Stats(t) | LoadRequest::Channels(t) | LoadRequest::Messages(t, _) => *t,
        }
    }
}

/// The result of an executed [`LoadRequest`].
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Stats(Ticket, Result<StatsSummary, ApiError>),
    Channels(Ticket, Result<Vec<String>, ApiError>),
    Messages(Ticket, Result<MessagePage, ApiError>),
}

impl LoadOutcome {
    /// A failed outcome for the region `ticket` belongs to.
    pub fn failed(ticket: Ticket, err: ApiError) -> Self {
        match ticket.region {
            Region::Stats => LoadOutcome::Stats(ticket, Err(err)),
            Region::Channels => LoadOutcome::Channels(ticket, Err(err)),
            Region::Messages => LoadOutcome::Messages(ticket, Err(err)),
        }
    }

    pub fn ticket(&self) -> Ticket {
        match self {
            LoadOutcome::Stats(t, _) | LoadOutcome::Channels(t, _) | LoadOutcome::Messages(t, _) => {
                *t
            }
        }
    }
}

/// Display state of one region.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionState<T> {
    /// No response yet.
    Loading,
    Ready(T),
    /// The last request failed; holds the message shown in place of data.
    Failed(String),
}

impl<T> RegionState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            RegionState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RegionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl<T> Default for RegionState<T> {
    fn default() -> Self {
        RegionState::Loading
    }
}

/// Per-region request counters.
#[derive(Debug, Clone, Default)]
struct Sequencer {
    stats: u64,
    channels: u64,
    messages: u64,
}

impl Sequencer {
    fn slot(&mut self, region: Region) -> &mut u64 {
        match region {
            Region::Stats => &mut self.stats,
            Region::Channels => &mut self.channels,
            Region::Messages => &mut self.messages,
        }
    }

    fn issue(&mut self, region: Region) -> Ticket {
        let slot = self.slot(region);
        *slot += 1;
        Ticket { region, seq: *slot }
    }

    fn latest(&self, region: Region) -> u64 {
        match region {
            Region::Stats => self.stats,
            Region::Channels => self.channels,
            Region::Messages => self.messages,
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.latest(ticket.region) == ticket.seq
    }
}

/// Owns all client-side dashboard state.
#[derive(Debug)]
pub struct DashboardController {
    page: u32,
    per_page: u32,
    controls: FilterControls,
    filters: FilterSet,

    stats: RegionState<StatsSummary>,
    channels: RegionState<Vec<String>>,
    messages: RegionState<MessagePage>,

    /// Pagination of the last page that loaded; drives prev/next state.
    last_pagination: Option<Pagination>,

    chart: Option<ChannelChart>,
    chart_generation: u64,

    sequencer: Sequencer,
    last_updated: Option<Instant>,
}

impl DashboardController {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            controls: FilterControls::default(),
            filters: FilterSet::default(),
            stats: RegionState::Loading,
            channels: RegionState::Loading,
            messages: RegionState::Loading,
            last_pagination: None,
            chart: None,
            chart_generation: 0,
            sequencer: Sequencer::default(),
            last_updated: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    /// Mutable access to the filter controls. Edits take effect on the next
    /// [`apply_filters`](Self::apply_filters).
    pub fn controls_mut(&mut self) -> &mut FilterControls {
        &mut self.controls
    }

    pub fn stats(&self) -> &RegionState<StatsSummary> {
        &self.stats
    }

    pub fn channels(&self) -> &RegionState<Vec<String>> {
        &self.channels
    }

    pub fn messages(&self) -> &RegionState<MessagePage> {
        &self.messages
    }

    /// Loaded channel names, empty until the channel list arrives.
    pub fn channel_names(&self) -> &[String] {
        self.channels.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The live chart instance, if any.
    pub fn chart(&self) -> Option<&ChannelChart> {
        self.chart.as_ref()
    }

    /// Prev/next state for the current page.
    pub fn page_status(&self) -> Option<PageStatus> {
        self.last_pagination.as_ref().map(PageStatus::from_pagination)
    }

    /// When a response was last applied.
    pub fn last_updated(&self) -> Option<Instant> {
        self.last_updated
    }

    /// Request stats, channels and the first unfiltered page of messages.
    pub fn initial_load(&mut self) -> Vec<LoadRequest> {
        self.page = 1;
        self.filters.clear();
        vec![self.stats_request(), self.channels_request(), self.messages_request()]
    }

    /// Request stats and messages with the current filters and page.
    pub fn refresh(&mut self) -> Vec<LoadRequest> {
        vec![self.stats_request(), self.messages_request()]
    }

    /// Apply the current filter controls and go back to page 1.
    pub fn apply_filters(&mut self) -> LoadRequest {
        self.filters = FilterSet::from_controls(&self.controls);
        self.page = 1;
        debug!(filters = %self.filters.summary(), "applying filters");
        self.messages_request()
    }

    /// Reset the controls and the active filters, and go back to page 1.
    pub fn clear_filters(&mut self) -> LoadRequest {
        self.controls.clear();
        self.filters.clear();
        self.page = 1;
        self.messages_request()
    }

    /// Move `delta` pages forward or back.
    ///
    /// Returns `None` when the move is in a direction whose control is
    /// disabled (already on the first or last page).
    pub fn change_page(&mut self, delta: i32) -> Option<LoadRequest> {
        // Bounds come from the last loaded page count, but the position is
        // the requested page, which may be ahead of what has loaded.
        let pages = self.last_pagination.as_ref().map(|p| p.pages);
        let allowed = match delta.signum() {
            1 => pages.is_some_and(|pages| self.page < pages),
            -1 => self.page > 1,
            _ => false,
        };
        if !allowed {
            return None;
        }

        let page = (i64::from(self.page) + i64::from(delta)).max(1);
        self.page = u32::try_from(page).unwrap_or(u32::MAX);
        Some(self.messages_request())
    }

    /// Apply a completed request.
    ///
    /// Returns `false` if the outcome was superseded by a newer request for
    /// the same region and was discarded.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        let ticket = outcome.ticket();
        if !self.sequencer.is_current(ticket) {
            debug!(
                region = %ticket.region,
                seq = ticket.seq,
                latest = self.sequencer.latest(ticket.region),
                "discarding stale response"
            );
            return false;
        }

        match outcome {
            LoadOutcome::Stats(_, Ok(stats)) => {
                self.rebuild_chart(&stats.top_channels);
                self.stats = RegionState::Ready(stats);
            }
            LoadOutcome::Stats(_, Err(err)) => {
                warn!(error = %err, "failed to load statistics");
                self.stats = RegionState::Failed(Region::Stats.error_message(&err));
            }
            LoadOutcome::Channels(_, Ok(channels)) => {
                self.channels = RegionState::Ready(channels);
            }
            LoadOutcome::Channels(_, Err(err)) => {
                warn!(error = %err, "failed to load channels");
                self.channels = RegionState::Failed(Region::Channels.error_message(&err));
            }
            LoadOutcome::Messages(_, Ok(page)) => {
                self.last_pagination = Some(page.pagination);
                self.messages = RegionState::Ready(page);
            }
            LoadOutcome::Messages(_, Err(err)) => {
                warn!(error = %err, "failed to load messages");
                self.messages = RegionState::Failed(Region::Messages.error_message(&err));
            }
        }

        self.last_updated = Some(Instant::now());
        true
    }

    /// Destroy the current chart, then build a new one from `channels`.
    fn rebuild_chart(&mut self, channels: &[ChannelCount]) {
        if let Some(old) = self.chart.take() {
            debug!(generation = old.generation, "destroying channel chart");
        }
        self.chart_generation += 1;
        self.chart = ChannelChart::build(self.chart_generation, channels);
    }

    fn stats_request(&mut self) -> LoadRequest {
        LoadRequest::Stats(self.sequencer.issue(Region::Stats))
    }

    fn channels_request(&mut self) -> LoadRequest {
        LoadRequest::Channels(self.sequencer.issue(Region::Channels))
    }

    fn messages_request(&mut self) -> LoadRequest {
        let query = MessageQuery::new(self.page, self.per_page, self.filters.clone());
        LoadRequest::Messages(self.sequencer.issue(Region::Messages), query)
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(crate::api::DEFAULT_PER_PAGE)
    }
}

//! Pure view construction.
//!
//! [`DashboardView::build`] turns a controller snapshot into a description
//! of everything on screen, with all formatting already applied. Both the
//! terminal UI and the HTML export draw from this description.

use chrono::{DateTime, Utc};

use crate::api::{Decision, Message, MessagePage, RecentSignal, StatsSummary};
use crate::controller::{DashboardController, RegionState};
use crate::data::format::{format_count, format_percent, format_percent_precise, truncate};
use crate::data::time::{full_timestamp, relative_time};
use crate::data::{ChannelChart, ConfidenceTier, FilterControls, PageStatus};

/// Channel names in the table are cut to this many characters.
pub const CHANNEL_WIDTH: usize = 15;
/// Sender names in the table are cut to this many characters.
pub const SENDER_WIDTH: usize = 12;
/// Message text in the table is cut to this many characters.
pub const TEXT_WIDTH: usize = 50;
/// Token addresses in the table are cut to this many characters.
pub const TOKEN_WIDTH: usize = 12;

pub const NO_SIGNALS: &str = "No recent buy signals";
pub const NO_MESSAGES: &str = "No messages found";
pub const TABLE_COLUMNS: [&str; 7] =
    ["Time", "Channel", "Sender", "Message", "Decision", "Confidence", "Token"];

/// A region that is loading, loaded, or replaced by an error message.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionView<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> RegionView<T> {
    fn from_state<S>(state: &RegionState<S>, f: impl FnOnce(&S) -> T) -> Self {
        match state {
            RegionState::Loading => RegionView::Loading,
            RegionState::Ready(value) => RegionView::Ready(f(value)),
            RegionState::Failed(msg) => RegionView::Error(msg.clone()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RegionView::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Display text with the untruncated value kept as detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub detail: Option<String>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detail: None,
        }
    }

    fn truncated(full: &str, max: usize) -> Self {
        Self {
            text: truncate(full, max),
            detail: Some(full.to_string()),
        }
    }
}

/// The five headline numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCards {
    pub total_messages: String,
    pub buy_decisions: String,
    pub hold_decisions: String,
    pub recent_24h: String,
    pub avg_confidence: String,
}

impl StatCards {
    fn build(stats: &StatsSummary) -> Self {
        Self {
            total_messages: format_count(stats.total_messages),
            buy_decisions: format_count(stats.buy_decisions),
            hold_decisions: format_count(stats.hold_decisions),
            recent_24h: format_count(stats.recent_messages_24h),
            avg_confidence: format_percent_precise(stats.avg_confidence),
        }
    }

    /// Label/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("Total Messages", &self.total_messages),
            ("Buy Signals", &self.buy_decisions),
            ("Hold Decisions", &self.hold_decisions),
            ("Last 24h", &self.recent_24h),
            ("Avg Confidence", &self.avg_confidence),
        ]
    }
}

/// One entry of the recent-signal feed.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalItem {
    pub channel: String,
    pub sender: String,
    pub time: Cell,
    pub confidence: String,
    pub tier: ConfidenceTier,
    pub text: String,
    pub token: Option<String>,
}

impl SignalItem {
    fn build(signal: &RecentSignal, now: DateTime<Utc>) -> Self {
        let ts = signal.processed_at();
        Self {
            channel: name_or_unknown(signal.channel_name.as_deref()),
            sender: name_or_unknown(signal.sender_name.as_deref()),
            time: Cell {
                text: relative_time(ts, now),
                detail: Some(full_timestamp(ts)),
            },
            confidence: confidence_label(signal.confidence),
            tier: ConfidenceTier::from_confidence(signal.confidence),
            text: signal.message_text.clone().unwrap_or_default(),
            token: signal.token_address.clone().filter(|t| !t.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignalFeed {
    /// Shows [`NO_SIGNALS`] and nothing else.
    Empty,
    Signals(Vec<SignalItem>),
}

/// One row of the message table.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRow {
    pub time: Cell,
    pub channel: Cell,
    pub sender: Cell,
    pub text: Cell,
    pub decision: Decision,
    pub confidence: String,
    pub tier: ConfidenceTier,
    pub token: Cell,
    pub rationale: Option<String>,
}

impl MessageRow {
    fn build(message: &Message, now: DateTime<Utc>) -> Self {
        let ts = message.processed_at();
        let channel = name_or_unknown(message.channel_name.as_deref());
        let sender = name_or_unknown(message.sender_name.as_deref());
        let text = message.message_text.as_deref().unwrap_or_default();
        let token = match message.token_address.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => Cell::truncated(token, TOKEN_WIDTH),
            None => Cell::plain("-"),
        };

        Self {
            time: Cell {
                text: relative_time(ts, now),
                detail: Some(full_timestamp(ts)),
            },
            channel: Cell::truncated(&channel, CHANNEL_WIDTH),
            sender: Cell::truncated(&sender, SENDER_WIDTH),
            text: Cell::truncated(text, TEXT_WIDTH),
            decision: message.llm_decision,
            confidence: confidence_label(message.llm_confidence),
            tier: ConfidenceTier::from_confidence(message.llm_confidence),
            token,
            rationale: message.llm_rationale.clone(),
        }
    }
}

impl MessageRow {
    /// The free-text cells, in column order, that carry an untruncated detail.
    pub fn text_cells(&self) -> [&Cell; 4] {
        [&self.time, &self.channel, &self.sender, &self.text]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageTable {
    /// A single placeholder row spanning every column.
    Empty,
    Rows(Vec<MessageRow>),
}

impl MessageTable {
    fn build(page: &MessagePage, now: DateTime<Utc>) -> Self {
        if page.messages.is_empty() {
            MessageTable::Empty
        } else {
            MessageTable::Rows(page.messages.iter().map(|m| MessageRow::build(m, now)).collect())
        }
    }

    pub fn rows(&self) -> &[MessageRow] {
        match self {
            MessageTable::Empty => &[],
            MessageTable::Rows(rows) => rows,
        }
    }
}

/// Pagination footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub range: String,
    pub page: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl From<PageStatus> for PaginationView {
    fn from(status: PageStatus) -> Self {
        Self {
            range: status.range_label(),
            page: status.page_label(),
            prev_enabled: status.prev_enabled,
            next_enabled: status.next_enabled,
        }
    }
}

/// One chart segment with its hover label.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub name: String,
    pub count: u64,
    pub share: f64,
    pub label: String,
}

/// The channel activity chart. Absent when there are no channels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub generation: u64,
    pub slices: Vec<ChartSlice>,
}

impl ChartView {
    fn build(chart: &ChannelChart) -> Self {
        Self {
            generation: chart.generation,
            slices: chart
                .segments
                .iter()
                .map(|s| ChartSlice {
                    name: s.name.clone(),
                    count: s.count,
                    share: s.share,
                    label: s.label(),
                })
                .collect(),
        }
    }
}

/// Filter controls and the filters actually in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarView {
    pub decision: String,
    pub channel: String,
    pub min_confidence: String,
    /// Summary of the applied filter set.
    pub active: String,
    /// Present when the channel list failed to load.
    pub channel_error: Option<String>,
}

impl FilterBarView {
    fn build(controls: &FilterControls, active: String, channel_error: Option<String>) -> Self {
        Self {
            decision: control_label(&controls.decision),
            channel: control_label(&controls.channel),
            min_confidence: control_label(&controls.min_confidence),
            active,
            channel_error,
        }
    }
}

/// Everything the dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub stats: RegionView<StatCards>,
    pub signals: RegionView<SignalFeed>,
    pub messages: RegionView<MessageTable>,
    pub pagination: Option<PaginationView>,
    pub chart: Option<ChartView>,
    pub filters: FilterBarView,
}

impl DashboardView {
    /// Describe the dashboard for the controller's current state.
    pub fn build(controller: &DashboardController, now: DateTime<Utc>) -> Self {
        let stats = RegionView::from_state(controller.stats(), StatCards::build);
        let signals = RegionView::from_state(controller.stats(), |s| {
            if s.recent_buy_signals.is_empty() {
                SignalFeed::Empty
            } else {
                SignalFeed::Signals(
                    s.recent_buy_signals.iter().map(|sig| SignalItem::build(sig, now)).collect(),
                )
            }
        });
        let messages =
            RegionView::from_state(controller.messages(), |page| MessageTable::build(page, now));

        Self {
            stats,
            signals,
            messages,
            pagination: controller.page_status().map(PaginationView::from),
            chart: controller.chart().map(ChartView::build),
            filters: FilterBarView::build(
                controller.controls(),
                controller.filters().summary(),
                controller.channels().error().map(str::to_string),
            ),
        }
    }
}

fn name_or_unknown(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => "Unknown".to_string(),
    }
}

fn confidence_label(confidence: Option<f64>) -> String {
    confidence.map(format_percent).unwrap_or_else(|| "N/A".to_string())
}

fn control_label(value: &str) -> String {
    if value.is_empty() {
        "any".to_string()
    } else {
        value.to_string()
    }
}

//! Wire types for the Moonitor JSON API.
//!
//! These types match the shapes served by the analysis backend under
//! `/api/stats`, `/api/channels` and `/api/messages`. Optional fields are
//! tolerated throughout: the backend emits `null` for anything the
//! classifier did not produce.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::time::parse_timestamp;

/// Classification label assigned to a message by the language model.
///
/// Anything other than `"buy"` or `"hold"` (including `null`) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Decision {
    Buy,
    Hold,
    #[default]
    Unknown,
}

impl Decision {
    /// Lowercase label, also used as the style key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Buy => "buy",
            Decision::Hold => "hold",
            Decision::Unknown => "unknown",
        }
    }

    /// Upper-cased label for table display.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Buy => "BUY",
            Decision::Hold => "HOLD",
            Decision::Unknown => "UNKNOWN",
        }
    }
}

impl From<Option<String>> for Decision {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("buy") => Decision::Buy,
            Some(s) if s.eq_ignore_ascii_case("hold") => Decision::Hold,
            _ => Decision::Unknown,
        }
    }
}

impl From<Decision> for Option<String> {
    fn from(value: Decision) -> Self {
        match value {
            Decision::Unknown => None,
            other => Some(other.as_str().to_string()),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response of `GET /api/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_messages: u64,
    pub buy_decisions: u64,
    pub hold_decisions: u64,
    pub recent_messages_24h: u64,
    /// Mean confidence over all classified messages, 0 when none exist.
    #[serde(default)]
    pub avg_confidence: f64,
    /// Most recent high-confidence buy signals, newest first.
    #[serde(default)]
    pub recent_buy_signals: Vec<RecentSignal>,
    /// Channels ordered by message count, busiest first.
    #[serde(default)]
    pub top_channels: Vec<ChannelCount>,
}

/// A high-confidence buy signal as listed in the stats summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentSignal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
}

impl RecentSignal {
    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        self.processed_at.as_deref().and_then(parse_timestamp)
    }
}

/// Message count for a single channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelCount {
    pub name: String,
    pub count: u64,
}

/// A processed Telegram message with its classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub message_text: Option<String>,
    #[serde(default)]
    pub llm_decision: Decision,
    #[serde(default)]
    pub llm_confidence: Option<f64>,
    /// Free-text explanation from the classifier, when it gave one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
}

impl Message {
    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        self.processed_at.as_deref().and_then(parse_timestamp)
    }
}

/// Pagination envelope that accompanies a page of messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page, 1-based.
    pub page: u32,
    pub per_page: u32,
    /// Total number of messages matching the filters.
    pub total: u64,
    /// Total number of pages.
    pub pages: u32,
}

/// Response of `GET /api/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    pub pagination: Pagination,
}

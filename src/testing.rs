//! Fixtures and an in-memory API for unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{
    ApiError, ChannelCount, DashboardApi, Decision, Message, MessagePage, MessageQuery,
    Pagination, RecentSignal, StatsSummary,
};

pub fn sample_stats() -> StatsSummary {
    StatsSummary {
        total_messages: 1234,
        buy_decisions: 40,
        hold_decisions: 1100,
        recent_messages_24h: 87,
        avg_confidence: 0.512,
        recent_buy_signals: vec![RecentSignal {
            id: Some(7),
            channel_name: Some("alpha calls".to_string()),
            sender_name: Some("bob".to_string()),
            processed_at: Some("2024-05-10T11:55:00".to_string()),
            confidence: Some(0.92),
            message_text: Some("<b>ape</b> into $MOON & hold".to_string()),
            token_address: Some("So11111111111111111111111111111111111111112".to_string()),
        }],
        top_channels: vec![
            ChannelCount {
                name: "alpha calls".to_string(),
                count: 3,
            },
            ChannelCount {
                name: "beta".to_string(),
                count: 1,
            },
        ],
    }
}

pub fn sample_message(i: u64) -> Message {
    Message {
        id: Some(i as i64),
        processed_at: Some("2024-05-10T10:00:00".to_string()),
        channel_name: Some("a channel with a long name".to_string()),
        sender_name: Some("sender".to_string()),
        message_text: Some(format!("message number {}", i)),
        llm_decision: if i % 2 == 0 {
            Decision::Buy
        } else {
            Decision::Hold
        },
        llm_confidence: Some(0.75),
        llm_rationale: None,
        token_address: None,
    }
}

/// A page of `total` messages split 20 per page.
pub fn message_page(page: u32, total: u64) -> MessagePage {
    let per_page = 20u64;
    let start = u64::from(page.saturating_sub(1)) * per_page;
    let count = total.saturating_sub(start).min(per_page);
    MessagePage {
        messages: (start..start + count).map(sample_message).collect(),
        pagination: Pagination {
            page,
            per_page: per_page as u32,
            total,
            pages: total.div_ceil(per_page) as u32,
        },
    }
}

/// In-memory [`DashboardApi`] with scripted responses.
#[derive(Debug)]
pub struct FakeApi {
    pub stats: Result<StatsSummary, ApiError>,
    pub channels: Result<Vec<String>, ApiError>,
    pub total_messages: u64,
    pub messages_error: Option<ApiError>,
    /// Make every messages request panic.
    pub panic_on_messages: bool,
    /// Delay applied to every messages request.
    pub messages_delay: Duration,
    /// Every messages query received, in order.
    pub queries: Mutex<Vec<MessageQuery>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            stats: Ok(sample_stats()),
            channels: Ok(vec!["alpha calls".to_string(), "beta".to_string()]),
            total_messages: 45,
            messages_error: None,
            panic_on_messages: false,
            messages_delay: Duration::ZERO,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn stats(&self) -> Result<StatsSummary, ApiError> {
        self.stats.clone()
    }

    async fn channels(&self) -> Result<Vec<String>, ApiError> {
        self.channels.clone()
    }

    async fn messages(&self, query: &MessageQuery) -> Result<MessagePage, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.panic_on_messages {
            panic!("messages request exploded");
        }
        if !self.messages_delay.is_zero() {
            tokio::time::sleep(self.messages_delay).await;
        }
        match &self.messages_error {
            Some(err) => Err(err.clone()),
            None => Ok(message_page(query.page, self.total_messages)),
        }
    }

    fn description(&self) -> &str {
        "fake"
    }
}

//! The read-only API boundary the dashboard consumes.
//!
//! The dashboard talks to three JSON endpoints of the Moonitor web server:
//!
//! - `GET /api/stats`: headline counts, recent buy signals, top channels
//! - `GET /api/channels`: distinct channel names for the filter control
//! - `GET /api/messages`: one filtered page of processed messages
//!
//! [`DashboardApi`] abstracts over them so the controller and loader can be
//! exercised against an in-memory implementation.

mod error;
mod http;
mod query;
mod types;

pub use error::ApiError;
pub use http::{HttpApi, HttpApiBuilder, DEFAULT_TIMEOUT};
pub use query::{MessageQuery, DEFAULT_PER_PAGE};
pub use types::{ChannelCount, Decision, Message, MessagePage, Pagination, RecentSignal, StatsSummary};

use std::fmt::Debug;

use async_trait::async_trait;

/// Trait for querying the dashboard data endpoints.
///
/// Implementations must be cheap to share across tasks; the loader holds
/// one behind an `Arc` and issues requests concurrently.
#[async_trait]
pub trait DashboardApi: Send + Sync + Debug {
    /// Fetch the statistics summary.
    async fn stats(&self) -> Result<StatsSummary, ApiError>;

    /// Fetch the distinct channel names.
    async fn channels(&self) -> Result<Vec<String>, ApiError>;

    /// Fetch one page of messages.
    async fn messages(&self, query: &MessageQuery) -> Result<MessagePage, ApiError>;

    /// Returns a human-readable description of the backend.
    ///
    /// Used for display in the TUI header.
    fn description(&self) -> &str;
}

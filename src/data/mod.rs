//! Client-side data models and formatting.
//!
//! Everything here is pure: no I/O, no clocks. Callers pass `now` where a
//! relative label is needed.
//!
//! ## Submodules
//!
//! - [`chart`]: Channel activity chart built from the stats summary
//! - [`filters`]: Filter controls and the applied [`FilterSet`]
//! - [`format`]: Truncation, thousands grouping and percentages
//! - [`pagination`]: Item range and prev/next state for the message table
//! - [`tier`]: Confidence tiers
//! - [`time`]: Timestamp parsing and relative labels

pub mod chart;
pub mod filters;
pub mod format;
pub mod pagination;
pub mod tier;
pub mod time;

pub use chart::{ChannelChart, ChartSegment};
pub use filters::{FilterControls, FilterKey, FilterSet};
pub use pagination::PageStatus;
pub use tier::ConfidenceTier;

//! # moonitor-dashboard
//!
//! A terminal dashboard for the Moonitor Telegram trading-signal monitor.
//!
//! Moonitor classifies Telegram messages with an LLM and exposes the results
//! through a small read-only JSON API. This crate loads that API into an
//! interactive terminal UI (statistic cards, recent buy signals, a channel
//! activity chart, and a filtered, paginated message table) and can write
//! the same dashboard as a standalone HTML snapshot.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐   ┌────────────┐   ┌──────────┐   ┌──────────┐  │
//! │  │  app    │──▶│ controller │──▶│  render  │──▶│ ui / html│  │
//! │  │ (state) │   │ (regions)  │   │  (view)  │   │          │  │
//! │  └────┬────┘   └────────────┘   └──────────┘   └──────────┘  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌─────────┐    ┌─────────┐                                  │
//! │  │ loader  │───▶│   api   │◀── HttpApi                       │
//! │  │ (tokio) │    │ (trait) │                                  │
//! │  └─────────┘    └─────────┘                                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`api`]**: response types and the [`DashboardApi`] trait, with an
//!   HTTP implementation built on reqwest
//! - **[`controller`]**: per-region load state, filters, pagination, and
//!   the sequence numbers that discard stale responses
//! - **[`loader`]**: runs requests on a tokio runtime and hands results back
//!   to the synchronous UI loop
//! - **[`data`]**: formatting, timestamps, confidence tiers, filter and
//!   pagination models, chart segments
//! - **[`render`]**: the pure [`DashboardView`] description and its HTML export
//! - **[`ui`]**: terminal rendering using ratatui
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use moonitor_dashboard::{DashboardController, HttpApi, Loader};
//!
//! # tokio_test::block_on(async {
//! let api = HttpApi::builder().endpoint("http://localhost:5000").build()?;
//! let mut loader = Loader::new(Arc::new(api), tokio::runtime::Handle::current());
//! let mut controller = DashboardController::default();
//!
//! loader.dispatch_all(controller.initial_load());
//! while let Some(outcome) = loader.recv().await {
//!     controller.apply(outcome);
//! }
//! # Ok::<_, moonitor_dashboard::ApiError>(())
//! # });
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod data;
pub mod events;
pub mod loader;
pub mod render;
pub mod ui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use api::{ApiError, DashboardApi, HttpApi, MessageQuery};
pub use app::App;
pub use config::Settings;
pub use controller::{DashboardController, LoadOutcome, LoadRequest, Region, RegionState};
pub use loader::Loader;
pub use render::DashboardView;

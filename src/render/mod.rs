//! Rendering of controller state into display descriptions.
//!
//! - [`view`]: pure construction of a [`DashboardView`] from a controller snapshot
//! - [`html`]: HTML snapshot export of a [`DashboardView`]

pub mod html;
pub mod view;

pub use view::{
    Cell, ChartSlice, ChartView, DashboardView, FilterBarView, MessageRow, MessageTable,
    PaginationView, RegionView, SignalFeed, SignalItem, StatCards,
};

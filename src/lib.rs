//! # Launch Dash
//!
//! SpaceX Launch Records Dashboard - a reactive web dashboard over a static
//! CSV of launch records.
//!
//! ## Features
//!
//! - **CSV loading**: One-shot load of the launch table, validated per row
//! - **Filtering**: Inclusive payload range and exact site selection
//! - **Charts**: Success pie chart and payload vs. outcome scatter, rendered
//!   to Plotly figure JSON
//! - **Reactive**: Input changes re-run only the callbacks that depend on them
//! - **Real-time**: Figures pushed to the browser over WebSocket
//!
//! ## Modules
//!
//! - [`dataset`]: Record types and the CSV loader
//! - [`filter`]: Payload and site filters
//! - [`charts`]: Pie and scatter chart builders
//! - [`reactive`]: Layout, input state and callback dispatch
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Per-connection reactive channel
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launch_dash::charts::{pie_chart, scatter_chart};
//! use launch_dash::dataset::{load_csv, PayloadRange, SiteSelector};
//! use launch_dash::filter::FilterCriteria;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = load_csv("spacex_launch_dash.csv".as_ref())?;
//!
//!     let pie = pie_chart(&table, &SiteSelector::All);
//!     println!("{}: {} successes", pie.title, pie.total());
//!
//!     let criteria = FilterCriteria::new(
//!         SiteSelector::parse("KSC LC-39A"),
//!         PayloadRange::new(2000.0, 8000.0)?,
//!     );
//!     let scatter = scatter_chart(&table, &criteria);
//!     println!("{}: {} points", scatter.title, scatter.points.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod filter;
pub mod reactive;
pub mod websocket;

// Re-export top-level types for convenience
pub use dataset::{
    load_csv, read_csv, DatasetError, DatasetResult, LaunchRecord, LaunchTable, PayloadRange,
    SiteSelector, ALL_SITES,
};

pub use filter::{filter_by_payload, filter_by_site, FilterCriteria};

pub use charts::{pie_chart, scatter_chart, ChartSpec, PieChart, ScatterChart};

pub use reactive::{Dashboard, InputState, InputValue, Layout, LayoutConfig, ReactiveError};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use websocket::{
    websocket_handler, ClientMessage, ConnectionHub, HubConfig, HubError, ServerMessage,
};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig};

//! Reactive Binding Layer
//!
//! Binds the dashboard's input components to its chart outputs.
//!
//! ## Architecture
//!
//! - **Layout**: Declarative page description (dropdown, slider, graphs)
//! - **Components**: Component ids, input values and per-session state
//! - **Dashboard**: Callback registry plus the dispatcher that re-runs only
//!   the callbacks whose declared inputs changed
//!
//! A session (one browser tab) owns an [`InputState`]; the [`Dashboard`] is
//! shared and read-only once built.
//!
//! ## Example
//!
//! ```rust,ignore
//! use launch_dash::reactive::*;
//!
//! let dashboard = Dashboard::launch_records(table, &LayoutConfig::default())?;
//! let mut state = dashboard.initial_state();
//! let first_paint = dashboard.render_all(&state)?;
//!
//! let updates = dashboard.on_input_change(
//!     &mut state,
//!     PAYLOAD_SLIDER,
//!     InputValue::range(0.0, 5000.0),
//! )?;
//! ```

mod component;
mod dashboard;
mod error;
mod layout;

pub use component::{
    InputKind, InputState, InputValue, PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN,
};
pub use dashboard::{CallbackFn, Dashboard, OutputUpdate};
pub use error::ReactiveError;
pub use layout::{Dropdown, DropdownOption, Layout, LayoutConfig, RangeSlider, SliderMark};

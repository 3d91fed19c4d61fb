//! UI components
//!
//! A component receives read-only props borrowed from state, renders them,
//! and turns events into actions. It never mutates application state.

pub mod forecast_panel;
pub mod forecast_view;
pub mod help_bar;
pub mod place_selector;

pub use tui_dispatch::Component;

pub use forecast_panel::{ForecastPanel, ForecastPanelProps};
pub use forecast_view::{ForecastView, ForecastViewProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use place_selector::{PLACEHOLDER, PlaceSelector, PlaceSelectorProps};

const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner frame for the given tick
fn spinner(tick_count: u32) -> &'static str {
    SPINNERS[(tick_count as usize / 2) % SPINNERS.len()]
}

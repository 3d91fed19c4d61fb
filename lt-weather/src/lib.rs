//! lt-weather: pick a Lithuanian place, see its long-term forecast
//!
//! The app follows a dispatch/reducer architecture:
//! 1. Event (keyboard) -> `ForecastView::handle_event()` -> actions
//! 2. Actions dispatched to a `tui_dispatch::EffectStore`
//! 3. [`reducer::reducer`] updates [`state::AppState`] and returns effects
//! 4. [`effect::handle_effect`] runs effects as keyed tasks on the
//!    `tui_dispatch::TaskManager`; results come back as `*Did*` actions
//! 5. If state changed, re-render

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;

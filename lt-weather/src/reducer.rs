//! Reducer - (state, action) -> state change + effects
//!
//! All state transitions live here. No I/O: network work is returned as
//! [`Effect`]s and its outcome comes back as another action.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, FORECAST_FETCH_FAILED, MISSING_PLACE_CODE};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Places =====
        Action::PlacesFetch => {
            if state.places_requested {
                return DispatchResult::unchanged();
            }
            state.places_requested = true;
            DispatchResult::effect(Effect::FetchPlaces)
        }

        Action::PlacesDidLoad(places) => {
            state.places = places;
            state.loading_places = false;
            state.cursor = state.cursor.min(state.selector_len() - 1);
            DispatchResult::changed()
        }

        Action::PlacesDidError(message) => {
            state.error = Some(message);
            state.loading_places = false;
            DispatchResult::changed()
        }

        Action::PlaceSelect(code) => {
            state.selected_place = state.places.iter().find(|p| p.code == code).cloned();
            load_forecast(state, code).mark_changed()
        }

        // ===== Forecast =====
        Action::ForecastDidLoad {
            request,
            code,
            forecast,
        } => {
            if request != state.forecast_request {
                tracing::debug!(request, latest = state.forecast_request, "Dropping stale forecast");
                return DispatchResult::unchanged();
            }
            state.forecast = Some(forecast);
            state.forecast_code = Some(code);
            state.loading_forecast = false;
            DispatchResult::changed()
        }

        Action::ForecastDidError { request, .. } => {
            if request != state.forecast_request {
                tracing::debug!(request, latest = state.forecast_request, "Dropping stale forecast error");
                return DispatchResult::unchanged();
            }
            state.error = Some(FORECAST_FETCH_FAILED.into());
            state.loading_forecast = false;
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiCursorUp => {
            if state.cursor == 0 {
                return DispatchResult::unchanged();
            }
            state.cursor -= 1;
            DispatchResult::changed()
        }

        Action::UiCursorDown => {
            if state.cursor + 1 >= state.selector_len() {
                return DispatchResult::unchanged();
            }
            state.cursor += 1;
            DispatchResult::changed()
        }

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            DispatchResult {
                // only re-render while something is loading
                changed: state.is_busy(),
                effects: vec![],
            }
        }

        // Handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start a forecast request for `code`, or record why it cannot start.
fn load_forecast(state: &mut AppState, code: String) -> DispatchResult<Effect> {
    if code.is_empty() {
        state.error = Some(MISSING_PLACE_CODE.into());
        return DispatchResult::changed();
    }

    state.loading_forecast = true;
    state.forecast_request += 1;
    DispatchResult::changed_with(Effect::FetchForecast {
        code,
        request: state.forecast_request,
    })
}

//! Application actions
//!
//! Naming follows the intent/result convention:
//! - `PlacesFetch`, `PlaceSelect` are intents
//! - `*DidLoad` / `*DidError` carry async results back
//! - `Ui*` actions only touch view-local state
//!
//! Categories are set explicitly so the place directory, forecast and UI
//! actions group cleanly (`is_places()`, `is_forecast()`, `is_ui()`).

use crate::state::{Forecast, Place};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    // ===== Places =====
    /// Intent: request the place directory (honoured once)
    #[action(category = "places")]
    PlacesFetch,

    /// Result: place directory loaded
    #[action(category = "places")]
    PlacesDidLoad(Vec<Place>),

    /// Result: place directory failed, with the message to show
    #[action(category = "places")]
    PlacesDidError(String),

    // ===== Forecast =====
    /// User picked a place code; empty for the placeholder row
    #[action(category = "forecast")]
    PlaceSelect(String),

    /// Result: forecast for `code`, request generation `request`
    #[action(category = "forecast")]
    ForecastDidLoad {
        request: u64,
        code: String,
        forecast: Forecast,
    },

    /// Result: forecast request `request` failed. `cause` is for the log only.
    #[action(category = "forecast")]
    ForecastDidError { request: u64, cause: String },

    // ===== UI =====
    #[action(category = "ui")]
    UiCursorUp,
    #[action(category = "ui")]
    UiCursorDown,

    // ===== Global =====
    /// Periodic tick for loading animation
    #[action(skip_category)]
    Tick,

    /// Exit the application
    #[action(skip_category)]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::Action as _;

    #[test]
    fn test_names() {
        assert_eq!(Action::PlaceSelect(String::new()).name(), "PlaceSelect");
        assert_eq!(
            Action::ForecastDidError {
                request: 1,
                cause: "boom".into()
            }
            .name(),
            "ForecastDidError"
        );
    }

    #[test]
    fn test_categories() {
        assert!(Action::PlacesDidLoad(vec![]).is_places());
        assert!(Action::PlaceSelect("VLN".into()).is_forecast());
        assert_eq!(Action::UiCursorDown.category(), Some("ui"));
        assert_eq!(Action::Tick.category(), None);
    }
}

//! Application state - single source of truth
//!
//! Components only ever see `&AppState`; the reducer is the only writer.

use serde::Deserialize;

/// Text shown when a selection carries no place code
pub const MISSING_PLACE_CODE: &str = "Place code is missing!";

/// Text shown for any failed forecast request
pub const FORECAST_FETCH_FAILED: &str = "Error fetching forecast data";

/// A selectable place from the directory service
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Place {
    pub code: String,
    pub name: String,
}

/// One reading of a long-term forecast
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastTimestamp {
    #[serde(default)]
    pub forecast_time_utc: Option<String>,
    pub air_temperature: f64,
    pub condition_code: String,
}

/// Long-term forecast, readings in server (chronological) order
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    #[serde(default)]
    pub forecast_timestamps: Vec<ForecastTimestamp>,
}

impl Forecast {
    /// The reading the view shows
    pub fn current(&self) -> Option<&ForecastTimestamp> {
        self.forecast_timestamps.first()
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Places in server order
    pub places: Vec<Place>,

    /// True until the place list request settles
    pub loading_places: bool,

    /// Set once the place list has been requested; it is never requested again
    pub places_requested: bool,

    /// True while the latest forecast request is in flight
    pub loading_forecast: bool,

    /// Last error, overwritten by the next one
    pub error: Option<String>,

    pub selected_place: Option<Place>,

    pub forecast: Option<Forecast>,

    /// Place code `forecast` was fetched for
    pub forecast_code: Option<String>,

    /// Generation of the latest forecast request; results for older ones are dropped
    pub forecast_request: u64,

    /// Highlighted selector row. Row 0 is the placeholder.
    pub cursor: usize,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            places: Vec::new(),
            loading_places: true,
            places_requested: false,
            loading_forecast: false,
            error: None,
            selected_place: None,
            forecast: None,
            forecast_code: None,
            forecast_request: 0,
            cursor: 0,
            tick_count: 0,
        }
    }

    /// Number of selector rows, placeholder included
    pub fn selector_len(&self) -> usize {
        self.places.len() + 1
    }

    /// Code behind the highlighted row; empty for the placeholder
    pub fn highlighted_code(&self) -> &str {
        match self.cursor.checked_sub(1) {
            Some(index) => self
                .places
                .get(index)
                .map(|place| place.code.as_str())
                .unwrap_or_default(),
            None => "",
        }
    }

    /// Forecast paired with the selected place, only when it was fetched for that place
    pub fn forecast_view(&self) -> Option<(&Place, &Forecast)> {
        let place = self.selected_place.as_ref()?;
        let forecast = self.forecast.as_ref()?;
        (self.forecast_code.as_deref() == Some(place.code.as_str())).then_some((place, forecast))
    }

    pub fn is_busy(&self) -> bool {
        self.loading_places || self.loading_forecast
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

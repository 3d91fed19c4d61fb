//! Effects - side effects declared by the reducer
//!
//! The reducer only describes the request; [`handle_effect`] turns it into
//! a keyed task whose result comes back as an action.

use tracing::{error, info, warn};
use tui_dispatch::TaskManager;

use crate::action::Action;
use crate::api::MeteoClient;

/// Task key for the one-shot place directory request
pub const PLACES_TASK: &str = "places";

/// Task key shared by all forecast requests, so a new one aborts the old
pub const FORECAST_TASK: &str = "forecast";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Load the place directory
    FetchPlaces,
    /// Load the forecast for `code`, tagged with generation `request`
    FetchForecast { code: String, request: u64 },
}

/// Spawn the task behind an effect.
pub fn handle_effect(effect: Effect, tasks: &mut TaskManager<Action>, client: &MeteoClient) {
    match effect {
        Effect::FetchPlaces => {
            let client = client.clone();
            tasks.spawn(PLACES_TASK, async move {
                match client.fetch_places().await {
                    Ok(places) => {
                        info!(count = places.len(), "Fetched places");
                        Action::PlacesDidLoad(places)
                    }
                    Err(e) => {
                        warn!(error = %e, "Place directory request failed");
                        Action::PlacesDidError(e.to_string())
                    }
                }
            });
        }
        Effect::FetchForecast { code, request } => {
            let client = client.clone();
            tasks.spawn(FORECAST_TASK, async move {
                info!(place = %code, request, "Fetching forecast");
                match client.fetch_forecast(&code).await {
                    Ok(forecast) => {
                        info!(
                            place = %code,
                            request,
                            readings = forecast.forecast_timestamps.len(),
                            "Forecast fetched"
                        );
                        Action::ForecastDidLoad {
                            request,
                            code,
                            forecast,
                        }
                    }
                    Err(e) => {
                        error!(place = %code, request, error = %e, "Error fetching forecast");
                        Action::ForecastDidError {
                            request,
                            cause: e.to_string(),
                        }
                    }
                }
            });
        }
    }
}
